use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create permission table
        manager
            .create_table(
                Table::create()
                    .table(Permission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Permission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Permission::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create user table; deleting a permission that is still referenced
        // must fail rather than cascade.
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(User::LastName).string_len(50).not_null())
                    .col(
                        ColumnDef::new(User::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(User::HashedPassword)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(User::IsActive)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(User::PermissionId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_permission_id")
                            .from(User::Table, User::PermissionId)
                            .to(Permission::Table, Permission::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_permission_id")
                    .table(User::Table)
                    .col(User::PermissionId)
                    .to_owned(),
            )
            .await?;

        // Seed the baseline permission tiers so the required foreign key
        // target exists before the first registration.
        let seed = Query::insert()
            .into_table(Permission::Table)
            .columns([Permission::Name])
            .values_panic(["admin".into()])
            .values_panic(["user".into()])
            .to_owned();
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Permission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Username,
    Email,
    HashedPassword,
    IsActive,
    PermissionId,
}

#[derive(DeriveIden)]
enum Permission {
    Table,
    Id,
    Name,
}

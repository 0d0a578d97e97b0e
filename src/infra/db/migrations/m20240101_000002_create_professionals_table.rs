//! Migration: Create professionals table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professionals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professionals::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Professionals::ProfessionalTitle)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professionals::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Professionals::Email).string().null())
                    .col(ColumnDef::new(Professionals::Company).string().null())
                    .col(ColumnDef::new(Professionals::LicenseNumber).string().null())
                    .col(
                        ColumnDef::new(Professionals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Directory search scans names
        manager
            .create_index(
                Index::create()
                    .name("idx_professionals_full_name")
                    .table(Professionals::Table)
                    .col(Professionals::FullName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Professionals {
    Table,
    Id,
    FullName,
    ProfessionalTitle,
    PhoneNumber,
    Email,
    Company,
    LicenseNumber,
    CreatedAt,
    UpdatedAt,
}

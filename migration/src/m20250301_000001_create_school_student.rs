use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(SchoolStudent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolStudent::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolStudent::Name).string().not_null())
                    .col(ColumnDef::new(SchoolStudent::Age).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 两个视图都按年龄过滤
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_school_student_age")
                    .table(SchoolStudent::Table)
                    .col(SchoolStudent::Age)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolStudent::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum SchoolStudent {
    #[sea_orm(iden = "school_student")]
    Table,
    Id,
    Name,
    Age,
}

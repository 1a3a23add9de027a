use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Headline,
    Bio,
    Skills,
    Experience,
    Education,
    Location,
    AvatarUrl,
    BannerUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    UserId,
    Content,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    PostId,
    UserId,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PostLikes {
    Table,
    Id,
    PostId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Name,
    Description,
    Website,
    LogoUrl,
    Industry,
    Size,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    RecruiterId,
    CompanyId,
    CompanyName,
    Title,
    Description,
    Requirements,
    Responsibilities,
    EmploymentType,
    ExperienceLevel,
    SalaryMin,
    SalaryMax,
    Location,
    IsRemote,
    SkillsRequired,
    Status,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    JobId,
    CandidateId,
    ResumeUrl,
    CoverLetter,
    Status,
    AppliedAt,
    UpdatedAt,
}

fn id<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn reference<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).big_integer().not_null().to_owned()
}

fn timestamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn optional_string<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).string().null().to_owned()
}

fn optional_text<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).text().null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id(Users::Id))
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(optional_string(Users::Name))
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(20)
                            .not_null()
                            .default("CANDIDATE"),
                    )
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(id(Profiles::Id))
                    .col(reference(Profiles::UserId).unique_key())
                    .col(optional_string(Profiles::Headline))
                    .col(optional_text(Profiles::Bio))
                    .col(optional_text(Profiles::Skills))
                    .col(optional_text(Profiles::Experience))
                    .col(optional_text(Profiles::Education))
                    .col(optional_string(Profiles::Location))
                    .col(optional_string(Profiles::AvatarUrl))
                    .col(optional_string(Profiles::BannerUrl))
                    .col(timestamp(Profiles::CreatedAt))
                    .col(timestamp(Profiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(id(Posts::Id))
                    .col(reference(Posts::UserId))
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(optional_string(Posts::ImageUrl))
                    .col(timestamp(Posts::CreatedAt))
                    .col(timestamp(Posts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_user")
                            .from(Posts::Table, Posts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_user_created")
                    .table(Posts::Table)
                    .col(Posts::UserId)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(id(Comments::Id))
                    .col(reference(Comments::PostId))
                    .col(reference(Comments::UserId))
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(timestamp(Comments::CreatedAt))
                    .col(timestamp(Comments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post")
                            .from(Comments::Table, Comments::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user")
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_post")
                    .table(Comments::Table)
                    .col(Comments::PostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostLikes::Table)
                    .if_not_exists()
                    .col(id(PostLikes::Id))
                    .col(reference(PostLikes::PostId))
                    .col(reference(PostLikes::UserId))
                    .col(timestamp(PostLikes::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_post")
                            .from(PostLikes::Table, PostLikes::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_user")
                            .from(PostLikes::Table, PostLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The like toggle relies on this constraint for ON CONFLICT DO NOTHING.
        manager
            .create_index(
                Index::create()
                    .name("uq_post_likes_post_user")
                    .table(PostLikes::Table)
                    .col(PostLikes::PostId)
                    .col(PostLikes::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(id(Companies::Id))
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(optional_text(Companies::Description))
                    .col(optional_string(Companies::Website))
                    .col(optional_string(Companies::LogoUrl))
                    .col(optional_string(Companies::Industry))
                    .col(optional_string(Companies::Size))
                    .col(optional_string(Companies::Location))
                    .col(timestamp(Companies::CreatedAt))
                    .col(timestamp(Companies::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_name")
                    .table(Companies::Table)
                    .col(Companies::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(id(Jobs::Id))
                    .col(reference(Jobs::RecruiterId))
                    .col(reference(Jobs::CompanyId))
                    .col(ColumnDef::new(Jobs::CompanyName).string().not_null())
                    .col(ColumnDef::new(Jobs::Title).string().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(optional_text(Jobs::Requirements))
                    .col(optional_text(Jobs::Responsibilities))
                    .col(optional_string(Jobs::EmploymentType))
                    .col(optional_string(Jobs::ExperienceLevel))
                    .col(ColumnDef::new(Jobs::SalaryMin).decimal_len(12, 2).null())
                    .col(ColumnDef::new(Jobs::SalaryMax).decimal_len(12, 2).null())
                    .col(optional_string(Jobs::Location))
                    .col(
                        ColumnDef::new(Jobs::IsRemote)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(optional_text(Jobs::SkillsRequired))
                    .col(
                        ColumnDef::new(Jobs::Status)
                            .string_len(20)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Jobs::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp(Jobs::CreatedAt))
                    .col(timestamp(Jobs::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_company")
                            .from(Jobs::Table, Jobs::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_recruiter")
                    .table(Jobs::Table)
                    .col(Jobs::RecruiterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_company")
                    .table(Jobs::Table)
                    .col(Jobs::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(id(Applications::Id))
                    .col(reference(Applications::JobId))
                    .col(reference(Applications::CandidateId))
                    .col(optional_string(Applications::ResumeUrl))
                    .col(optional_text(Applications::CoverLetter))
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string_len(20)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(timestamp(Applications::AppliedAt))
                    .col(timestamp(Applications::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job")
                            .from(Applications::Table, Applications::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_candidate")
                            .from(Applications::Table, Applications::CandidateId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_applications_job_candidate")
                    .table(Applications::Table)
                    .col(Applications::JobId)
                    .col(Applications::CandidateId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

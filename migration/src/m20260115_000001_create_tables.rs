use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建账号表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目组表
        manager
            .create_table(
                Table::create()
                    .table(SubjectGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubjectGroups::NameTh)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SubjectGroups::NameEn).string().null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classrooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classrooms::Number).integer().not_null())
                    .col(ColumnDef::new(Classrooms::Year).integer().not_null())
                    .col(ColumnDef::new(Classrooms::Semester).integer().not_null())
                    .col(
                        ColumnDef::new(Classrooms::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学年学期内班号唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_classrooms_number_year_semester")
                    .table(Classrooms::Table)
                    .col(Classrooms::Number)
                    .col(Classrooms::Year)
                    .col(Classrooms::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Prefix).string().not_null())
                    .col(ColumnDef::new(Students::FirstNameTh).string().not_null())
                    .col(ColumnDef::new(Students::MiddleNameTh).string().null())
                    .col(ColumnDef::new(Students::LastNameTh).string().not_null())
                    .col(ColumnDef::new(Students::NicknameTh).string().null())
                    .col(ColumnDef::new(Students::FirstNameEn).string().null())
                    .col(ColumnDef::new(Students::MiddleNameEn).string().null())
                    .col(ColumnDef::new(Students::LastNameEn).string().null())
                    .col(ColumnDef::new(Students::NicknameEn).string().null())
                    .col(ColumnDef::new(Students::Birthdate).date().not_null())
                    .col(
                        ColumnDef::new(Students::CitizenId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::UserId).big_integer().null())
                    .col(ColumnDef::new(Students::ClassroomId).big_integer().null())
                    .col(ColumnDef::new(Students::ClassNo).integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::TeacherNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Prefix).string().not_null())
                    .col(ColumnDef::new(Teachers::FirstNameTh).string().not_null())
                    .col(ColumnDef::new(Teachers::MiddleNameTh).string().null())
                    .col(ColumnDef::new(Teachers::LastNameTh).string().not_null())
                    .col(ColumnDef::new(Teachers::NicknameTh).string().null())
                    .col(ColumnDef::new(Teachers::FirstNameEn).string().null())
                    .col(ColumnDef::new(Teachers::MiddleNameEn).string().null())
                    .col(ColumnDef::new(Teachers::LastNameEn).string().null())
                    .col(ColumnDef::new(Teachers::NicknameEn).string().null())
                    .col(ColumnDef::new(Teachers::Birthdate).date().not_null())
                    .col(
                        ColumnDef::new(Teachers::CitizenId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(Teachers::SubjectGroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::SubjectGroupId)
                            .to(SubjectGroups::Table, SubjectGroups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班主任关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassAdvisors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassAdvisors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassAdvisors::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAdvisors::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassAdvisors::Table, ClassAdvisors::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassAdvisors::Table, ClassAdvisors::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_advisors_classroom_teacher")
                    .table(ClassAdvisors::Table)
                    .col(ClassAdvisors::ClassroomId)
                    .col(ClassAdvisors::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::CodeTh).string().not_null())
                    .col(ColumnDef::new(Subjects::CodeEn).string().null())
                    .col(ColumnDef::new(Subjects::NameTh).string().not_null())
                    .col(ColumnDef::new(Subjects::NameEn).string().null())
                    .col(ColumnDef::new(Subjects::ShortNameTh).string().null())
                    .col(ColumnDef::new(Subjects::ShortNameEn).string().null())
                    .col(ColumnDef::new(Subjects::DescriptionTh).text().null())
                    .col(ColumnDef::new(Subjects::DescriptionEn).text().null())
                    .col(ColumnDef::new(Subjects::Credit).double().not_null())
                    .col(ColumnDef::new(Subjects::Year).integer().not_null())
                    .col(ColumnDef::new(Subjects::Semester).integer().not_null())
                    .col(ColumnDef::new(Subjects::GroupId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::GroupId)
                            .to(SubjectGroups::Table, SubjectGroups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学年学期内科目代码唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_code_year_semester")
                    .table(Subjects::Table)
                    .col(Subjects::CodeTh)
                    .col(Subjects::Year)
                    .col(Subjects::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建科目任课教师关联表
        manager
            .create_table(
                Table::create()
                    .table(SubjectTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectTeachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubjectTeachers::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectTeachers::Table, SubjectTeachers::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectTeachers::Table, SubjectTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subject_teachers_subject_teacher")
                    .table(SubjectTeachers::Table)
                    .col(SubjectTeachers::SubjectId)
                    .col(SubjectTeachers::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建课程表记录表
        manager
            .create_table(
                Table::create()
                    .table(ScheduleItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduleItems::Day).integer().not_null())
                    .col(
                        ColumnDef::new(ScheduleItems::StartTime)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduleItems::Duration).integer().not_null())
                    .col(ColumnDef::new(ScheduleItems::Room).string().not_null())
                    .col(
                        ColumnDef::new(ScheduleItems::Version)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleItems::Table, ScheduleItems::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleItems::Table, ScheduleItems::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleItems::Table, ScheduleItems::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程表按教师/班级读取
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_items_teacher")
                    .table(ScheduleItems::Table)
                    .col(ScheduleItems::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_items_classroom")
                    .table(ScheduleItems::Table)
                    .col(ScheduleItems::ClassroomId)
                    .to_owned(),
            )
            .await?;

        // 创建新闻表
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(News::NewsType).string().not_null())
                    .col(ColumnDef::new(News::TitleTh).string().not_null())
                    .col(ColumnDef::new(News::TitleEn).string().null())
                    .col(ColumnDef::new(News::DescriptionTh).text().not_null())
                    .col(ColumnDef::new(News::DescriptionEn).text().null())
                    .col(ColumnDef::new(News::BodyTh).text().null())
                    .col(ColumnDef::new(News::BodyEn).text().null())
                    .col(ColumnDef::new(News::ImageUrl).string().null())
                    .col(ColumnDef::new(News::PostedAt).big_integer().not_null())
                    .col(ColumnDef::new(News::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScheduleItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubjectTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassAdvisors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classrooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubjectGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SubjectGroups {
    Table,
    Id,
    NameTh,
    NameEn,
}

#[derive(DeriveIden)]
enum Classrooms {
    Table,
    Id,
    Number,
    Year,
    Semester,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    StudentNo,
    Prefix,
    FirstNameTh,
    MiddleNameTh,
    LastNameTh,
    NicknameTh,
    FirstNameEn,
    MiddleNameEn,
    LastNameEn,
    NicknameEn,
    Birthdate,
    CitizenId,
    UserId,
    ClassroomId,
    ClassNo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    TeacherNo,
    Prefix,
    FirstNameTh,
    MiddleNameTh,
    LastNameTh,
    NicknameTh,
    FirstNameEn,
    MiddleNameEn,
    LastNameEn,
    NicknameEn,
    Birthdate,
    CitizenId,
    UserId,
    SubjectGroupId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassAdvisors {
    Table,
    Id,
    ClassroomId,
    TeacherId,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    CodeTh,
    CodeEn,
    NameTh,
    NameEn,
    ShortNameTh,
    ShortNameEn,
    DescriptionTh,
    DescriptionEn,
    Credit,
    Year,
    Semester,
    GroupId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SubjectTeachers {
    Table,
    Id,
    SubjectId,
    TeacherId,
}

#[derive(DeriveIden)]
enum ScheduleItems {
    Table,
    Id,
    SubjectId,
    TeacherId,
    ClassroomId,
    Day,
    StartTime,
    Duration,
    Room,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    NewsType,
    TitleTh,
    TitleEn,
    DescriptionTh,
    DescriptionEn,
    BodyTh,
    BodyEn,
    ImageUrl,
    PostedAt,
    UpdatedAt,
}

//! 预导入模块，方便使用

pub use super::class_advisors::{
    ActiveModel as ClassAdvisorActiveModel, Entity as ClassAdvisors, Model as ClassAdvisorModel,
};
pub use super::classrooms::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::news::{ActiveModel as NewsActiveModel, Entity as News, Model as NewsModel};
pub use super::schedule_items::{
    ActiveModel as ScheduleItemActiveModel, Entity as ScheduleItems, Model as ScheduleItemModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subject_groups::{
    ActiveModel as SubjectGroupActiveModel, Entity as SubjectGroups, Model as SubjectGroupModel,
};
pub use super::subject_teachers::{
    ActiveModel as SubjectTeacherActiveModel, Entity as SubjectTeachers,
    Model as SubjectTeacherModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};

//! 周课表服务
//!
//! 课表不落库：每次请求都把 schedule_items 折叠进空白网格再返回。写入
//! 操作（新增/编辑/移动）先在服务端按同一套纯函数重新校验落点，最终以
//! 数据库（含版本计数）为准。

pub mod create;
pub mod delete;
pub mod get;
pub mod move_period;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::schedule::entities::{Day, Schedule};
use crate::models::schedule::grid::{empty_schedule, populate_schedule};
use crate::models::schedule::requests::{
    CreateScheduleItemRequest, MoveScheduleItemRequest, ScheduleItemFilter,
    UpdateScheduleItemRequest,
};
use crate::storage::Storage;

/// 教学日数量（周一到周五）
pub const SCHOOL_DAYS: u8 = 5;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 班级视角的周课表
    pub async fn get_classroom_schedule(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom_schedule(self, request, classroom_id).await
    }

    // 教师视角的周课表
    pub async fn get_teacher_schedule(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher_schedule(self, request, teacher_id).await
    }

    // 新增课程表记录
    pub async fn create_item(
        &self,
        request: &HttpRequest,
        item_data: CreateScheduleItemRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_item(self, request, item_data).await
    }

    // 编辑课程表记录
    pub async fn update_item(
        &self,
        request: &HttpRequest,
        item_id: i64,
        update_data: UpdateScheduleItemRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_item(self, request, item_id, update_data).await
    }

    // 拖拽移动课程表记录
    pub async fn move_item(
        &self,
        request: &HttpRequest,
        item_id: i64,
        move_data: MoveScheduleItemRequest,
    ) -> ActixResult<HttpResponse> {
        move_period::move_item(self, request, item_id, move_data).await
    }

    // 删除课程表记录
    pub async fn delete_item(
        &self,
        request: &HttpRequest,
        item_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_item(self, request, item_id).await
    }
}

/// 按过滤条件重建周课表网格
pub(crate) async fn assemble_schedule(
    storage: &Arc<dyn Storage>,
    filter: ScheduleItemFilter,
) -> Result<Schedule> {
    let items = storage.list_schedule_items(filter).await?;
    Ok(populate_schedule(empty_schedule(Day::MONDAY, SCHOOL_DAYS), items))
}

/// 校验当前账号可以修改这条记录：教师只能改自己的，管理员不受限
pub(crate) fn ensure_can_modify_item(
    request: &HttpRequest,
    own_teacher_id: Option<i64>,
    item_teacher_id: i64,
) -> Option<HttpResponse> {
    use crate::middlewares::RequireJWT;
    use crate::models::users::entities::UserRole;
    use crate::models::{ApiResponse, ErrorCode};

    match RequireJWT::extract_user_role(request) {
        Some(UserRole::Admin) => None,
        Some(UserRole::Teacher) => {
            if own_teacher_id == Some(item_teacher_id) {
                None
            } else {
                Some(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PermissionDenied,
                    "You cannot modify another teacher's schedule",
                )))
            }
        }
        _ => Some(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "You do not have permission to modify schedules",
        ))),
    }
}

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
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

    // 获取班级列表
    pub async fn list_classrooms(
        &self,
        request: &HttpRequest,
        query: ClassroomListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, request, query).await
    }

    // 创建班级
    pub async fn create_classroom(
        &self,
        request: &HttpRequest,
        classroom_data: CreateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, request, classroom_data).await
    }

    // 班级详情（含班主任与在册人数）
    pub async fn get_classroom(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom(self, request, classroom_id).await
    }

    // 班级花名册
    pub async fn get_classroom_roster(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom_roster(self, request, classroom_id).await
    }

    // 更新班级
    pub async fn update_classroom(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        update_data: UpdateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, request, classroom_id, update_data).await
    }

    // 删除班级
    pub async fn delete_classroom(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, request, classroom_id).await
    }
}

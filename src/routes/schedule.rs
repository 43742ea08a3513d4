use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::schedule::requests::{
    CreateScheduleItemRequest, MoveScheduleItemRequest, UpdateScheduleItemRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ScheduleService;
use crate::utils::{SafeClassroomIdI64, SafeScheduleItemIdI64, SafeTeacherIdI64};

// 懒加载的全局 SCHEDULE_SERVICE 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

// HTTP处理程序
pub async fn get_classroom_schedule(
    req: HttpRequest,
    classroom_id: SafeClassroomIdI64,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .get_classroom_schedule(&req, classroom_id.0)
        .await
}

pub async fn get_teacher_schedule(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .get_teacher_schedule(&req, teacher_id.0)
        .await
}

pub async fn create_item(
    req: HttpRequest,
    item_data: web::Json<CreateScheduleItemRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_item(&req, item_data.into_inner())
        .await
}

pub async fn update_item(
    req: HttpRequest,
    item_id: SafeScheduleItemIdI64,
    update_data: web::Json<UpdateScheduleItemRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_item(&req, item_id.0, update_data.into_inner())
        .await
}

pub async fn move_item(
    req: HttpRequest,
    item_id: SafeScheduleItemIdI64,
    move_data: web::Json<MoveScheduleItemRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .move_item(&req, item_id.0, move_data.into_inner())
        .await
}

pub async fn delete_item(
    req: HttpRequest,
    item_id: SafeScheduleItemIdI64,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_item(&req, item_id.0).await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedule")
            .wrap(middlewares::RequireJWT)
            // 课表读取：所有登录账号
            .service(
                web::resource("/classroom/{classroom_id}")
                    .route(web::get().to(get_classroom_schedule)),
            )
            .service(
                web::resource("/teacher/{teacher_id}").route(web::get().to(get_teacher_schedule)),
            )
            // 课表写入：教师操作自己的课，管理员不受限
            .service(
                web::resource("/items").route(
                    web::post()
                        .to(create_item)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/items/{item_id}/move").route(
                    web::put()
                        .to(move_item)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/items/{item_id}")
                    .route(
                        web::put()
                            .to(update_item)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_item)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}

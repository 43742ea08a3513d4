//! 学生名录导入服务
//!
//! CSV 列（表头定位，列序无关）：
//! 必需 student_no, prefix, first_name_th, last_name_th, birthdate, citizen_id
//! 可选 middle_name_th, nickname_th, first_name_en, middle_name_en,
//!      last_name_en, nickname_en, class_no

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::error;

use super::StudentService;
use crate::models::common::import::{ImportRowError, ImportSummaryResponse};
use crate::models::common::localized::{LocalizedName, PersonName};
use crate::models::students::entities::NamePrefix;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::import::{
    CsvSheet, IMPORT_MAX_ROWS, cell, optional_cell, read_file_from_multipart,
};
use crate::utils::validate::{validate_citizen_id, validate_student_no};

/// 导入行数据
#[derive(Debug, Clone)]
struct ImportRow {
    row_num: usize,
    student_no: String,
    prefix: String,
    first_name_th: String,
    middle_name_th: Option<String>,
    last_name_th: String,
    nickname_th: Option<String>,
    first_name_en: Option<String>,
    middle_name_en: Option<String>,
    last_name_en: Option<String>,
    nickname_en: Option<String>,
    birthdate: String,
    citizen_id: String,
    class_no: Option<String>,
}

/// 导入学生
pub async fn import_students(
    service: &StudentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 读取文件内容
    let (file_bytes, _file_name) = match read_file_from_multipart(&mut payload).await {
        Ok(result) => result,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ImportFileUploadFailed,
                format!("文件读取失败: {e}"),
            )));
        }
    };

    // 解析 CSV
    let rows = match parse_rows(&file_bytes) {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(e.error_code(), e.message())));
        }
    };

    if rows.len() > IMPORT_MAX_ROWS {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            format!("单次导入最多支持 {IMPORT_MAX_ROWS} 行"),
        )));
    }

    // 验证并过滤数据
    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut valid_rows: Vec<ImportRow> = Vec::new();

    for row in &rows {
        let mut row_errors = validate_row(row);
        if row_errors.is_empty() {
            valid_rows.push(row.clone());
        } else {
            errors.append(&mut row_errors);
        }
    }

    // 批量检查学号和身份证号冲突
    let student_nos: Vec<String> = valid_rows.iter().map(|r| r.student_no.clone()).collect();
    let citizen_ids: Vec<String> = valid_rows.iter().map(|r| r.citizen_id.clone()).collect();

    let existing_nos: HashSet<String> = storage
        .check_student_nos_exist(&student_nos)
        .await
        .unwrap_or_default()
        .into_iter()
        .collect();
    let existing_citizen_ids: HashSet<String> = storage
        .check_student_citizen_ids_exist(&citizen_ids)
        .await
        .unwrap_or_default()
        .into_iter()
        .collect();

    // 过滤冲突行
    let mut skipped = 0;
    let mut to_create: Vec<ImportRow> = Vec::new();

    for row in valid_rows {
        if existing_nos.contains(&row.student_no) {
            skipped += 1;
            errors.push(ImportRowError {
                row: row.row_num,
                field: "student_no".to_string(),
                message: "学号已存在".to_string(),
            });
        } else if existing_citizen_ids.contains(&row.citizen_id) {
            skipped += 1;
            errors.push(ImportRowError {
                row: row.row_num,
                field: "citizen_id".to_string(),
                message: "身份证号已存在".to_string(),
            });
        } else {
            to_create.push(row);
        }
    }

    // 逐行创建
    let mut success = 0;
    let mut failed = 0;

    for row in to_create {
        let row_num = row.row_num;
        let create_req = match build_create_request(row) {
            Ok(req) => req,
            Err(row_error) => {
                failed += 1;
                errors.push(row_error);
                continue;
            }
        };

        match storage.create_student(create_req).await {
            Ok(_) => success += 1,
            Err(e) => {
                failed += 1;
                error!("导入创建学生失败: {}", e);
                errors.push(ImportRowError {
                    row: row_num,
                    field: "".to_string(),
                    message: format!("创建失败: {e}"),
                });
            }
        }
    }

    let response = ImportSummaryResponse {
        total: rows.len(),
        success,
        skipped,
        failed,
        errors,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "导入完成")))
}

fn parse_rows(data: &[u8]) -> Result<Vec<ImportRow>, crate::utils::import::ImportParseError> {
    let sheet = CsvSheet::parse(data)?;

    // 必需列
    let student_no_idx = sheet.require("student_no")?;
    let prefix_idx = sheet.require("prefix")?;
    let first_name_th_idx = sheet.require("first_name_th")?;
    let last_name_th_idx = sheet.require("last_name_th")?;
    let birthdate_idx = sheet.require("birthdate")?;
    let citizen_id_idx = sheet.require("citizen_id")?;

    // 可选列
    let middle_name_th_idx = sheet.optional("middle_name_th");
    let nickname_th_idx = sheet.optional("nickname_th");
    let first_name_en_idx = sheet.optional("first_name_en");
    let middle_name_en_idx = sheet.optional("middle_name_en");
    let last_name_en_idx = sheet.optional("last_name_en");
    let nickname_en_idx = sheet.optional("nickname_en");
    let class_no_idx = sheet.optional("class_no");

    Ok(sheet
        .rows
        .iter()
        .map(|(row_num, record)| ImportRow {
            row_num: *row_num,
            student_no: cell(record, student_no_idx),
            prefix: cell(record, prefix_idx),
            first_name_th: cell(record, first_name_th_idx),
            middle_name_th: optional_cell(record, middle_name_th_idx),
            last_name_th: cell(record, last_name_th_idx),
            nickname_th: optional_cell(record, nickname_th_idx),
            first_name_en: optional_cell(record, first_name_en_idx),
            middle_name_en: optional_cell(record, middle_name_en_idx),
            last_name_en: optional_cell(record, last_name_en_idx),
            nickname_en: optional_cell(record, nickname_en_idx),
            birthdate: cell(record, birthdate_idx),
            citizen_id: cell(record, citizen_id_idx),
            class_no: optional_cell(record, class_no_idx),
        })
        .collect())
}

fn validate_row(row: &ImportRow) -> Vec<ImportRowError> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_student_no(&row.student_no) {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "student_no".to_string(),
            message: msg.to_string(),
        });
    }

    if row.prefix.parse::<NamePrefix>().is_err() {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "prefix".to_string(),
            message: format!("无效的称谓: {}，支持: Master, Mr., Mrs., Miss.", row.prefix),
        });
    }

    if row.first_name_th.is_empty() || row.last_name_th.is_empty() {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "first_name_th".to_string(),
            message: "泰语姓名不能为空".to_string(),
        });
    }

    if chrono::NaiveDate::parse_from_str(&row.birthdate, "%Y-%m-%d").is_err() {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "birthdate".to_string(),
            message: format!("无效的出生日期: {}，格式: YYYY-MM-DD", row.birthdate),
        });
    }

    if let Err(msg) = validate_citizen_id(&row.citizen_id) {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "citizen_id".to_string(),
            message: msg.to_string(),
        });
    }

    if let Some(ref class_no) = row.class_no
        && class_no.parse::<i32>().is_err()
    {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "class_no".to_string(),
            message: format!("无效的班内序号: {class_no}"),
        });
    }

    errors
}

fn build_create_request(row: ImportRow) -> Result<CreateStudentRequest, ImportRowError> {
    let prefix = row.prefix.parse::<NamePrefix>().map_err(|_| ImportRowError {
        row: row.row_num,
        field: "prefix".to_string(),
        message: format!("无效的称谓: {}", row.prefix),
    })?;

    let birthdate =
        chrono::NaiveDate::parse_from_str(&row.birthdate, "%Y-%m-%d").map_err(|_| {
            ImportRowError {
                row: row.row_num,
                field: "birthdate".to_string(),
                message: format!("无效的出生日期: {}", row.birthdate),
            }
        })?;

    // 英语名：名和姓都有才算有
    let en = match (row.first_name_en, row.last_name_en) {
        (Some(first_name), Some(last_name)) => Some(PersonName {
            first_name,
            middle_name: row.middle_name_en,
            last_name,
            nickname: row.nickname_en,
        }),
        _ => None,
    };

    Ok(CreateStudentRequest {
        student_no: row.student_no,
        prefix,
        name: LocalizedName {
            th: PersonName {
                first_name: row.first_name_th,
                middle_name: row.middle_name_th,
                last_name: row.last_name_th,
                nickname: row.nickname_th,
            },
            en,
        },
        birthdate,
        citizen_id: row.citizen_id,
        user_id: None,
        classroom_id: None,
        class_no: row.class_no.and_then(|n| n.parse::<i32>().ok()),
    })
}

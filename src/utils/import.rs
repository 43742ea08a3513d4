//! CSV 批量导入辅助
//!
//! 管理端的学生/教师名录导入共用：multipart 文件读取 + 表头定位 + 取值。
//! 表头按列名（不区分大小写）定位，不依赖列顺序。

use std::collections::HashMap;
use std::io::Cursor;

use actix_multipart::Multipart;
use csv::StringRecord;
use futures_util::StreamExt;

use crate::models::ErrorCode;

/// 单次导入的最大数据行数
pub const IMPORT_MAX_ROWS: usize = 1000;

/// 导入解析错误
pub enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
    EmptyFile,
}

impl ImportParseError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
            Self::EmptyFile => ErrorCode::ImportFileDataInvalid,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("缺少必需列: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
            Self::EmptyFile => "文件中没有数据".to_string(),
        }
    }
}

/// 解析后的 CSV 表：表头索引 + 带行号的数据行
pub struct CsvSheet {
    header_index: HashMap<String, usize>,
    // (文件行号, 记录)，行号从 2 起（1 为表头）
    pub rows: Vec<(usize, StringRecord)>,
}

impl CsvSheet {
    /// 解析 CSV 字节流
    pub fn parse(data: &[u8]) -> Result<Self, ImportParseError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(data));

        let headers = rdr
            .headers()
            .map_err(|e| ImportParseError::ParseFailed(format!("读取表头失败: {e}")))?;
        let header_index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let mut rows = Vec::new();
        for (row_num, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| {
                ImportParseError::ParseFailed(format!("第 {} 行解析失败: {e}", row_num + 2))
            })?;
            rows.push((row_num + 2, record));
        }

        if rows.is_empty() {
            return Err(ImportParseError::EmptyFile);
        }

        Ok(Self { header_index, rows })
    }

    /// 必需列的索引；缺失时报 MissingColumn
    pub fn require(&self, column: &str) -> Result<usize, ImportParseError> {
        self.header_index
            .get(column)
            .copied()
            .ok_or_else(|| ImportParseError::MissingColumn(column.to_string()))
    }

    /// 可选列的索引
    pub fn optional(&self, column: &str) -> Option<usize> {
        self.header_index.get(column).copied()
    }
}

/// 取指定列的值并去除首尾空白；列不存在时返回空串
pub fn cell(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

/// 取可选列的值；空串视为缺失
pub fn optional_cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.map(|i| cell(record, i)).filter(|s| !s.is_empty())
}

/// 从 multipart 请求中读取上传文件，返回 (内容, 文件名)
pub async fn read_file_from_multipart(payload: &mut Multipart) -> Result<(Vec<u8>, String), String> {
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("读取字段失败: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            // 获取文件名
            if let Some(content_disposition) = field.content_disposition() {
                file_name = content_disposition
                    .get_filename()
                    .unwrap_or("upload.csv")
                    .to_string();
            }

            // 读取内容
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("读取数据失败: {e}"))?;
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("未找到文件字段".to_string());
    }

    Ok((file_bytes, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locates_headers_case_insensitively() {
        let data = b"Student_No,First_Name_TH,Last_Name_TH\n40512,\xe0\xb8\xaa\xe0\xb8\xa1\xe0\xb8\x8a\xe0\xb8\xb2\xe0\xb8\xa2,\xe0\xb9\x83\xe0\xb8\x88\xe0\xb8\x94\xe0\xb8\xb5\n";
        let sheet = CsvSheet::parse(data).ok().unwrap();
        assert_eq!(sheet.require("student_no").ok(), Some(0));
        assert_eq!(sheet.require("first_name_th").ok(), Some(1));
        assert!(sheet.require("citizen_id").is_err());
    }

    #[test]
    fn test_parse_reports_file_row_numbers() {
        let data = b"a,b\n1,2\n3,4\n";
        let sheet = CsvSheet::parse(data).ok().unwrap();
        let rows: Vec<usize> = sheet.rows.iter().map(|(n, _)| *n).collect();
        // 表头是第 1 行，数据从第 2 行开始
        assert_eq!(rows, vec![2, 3]);
    }

    #[test]
    fn test_parse_rejects_headers_only() {
        let data = b"a,b\n";
        assert!(CsvSheet::parse(data).is_err());
    }

    #[test]
    fn test_optional_cell_treats_empty_as_missing() {
        let data = b"a,b\n1,\n";
        let sheet = CsvSheet::parse(data).ok().unwrap();
        let (_, record) = &sheet.rows[0];
        assert_eq!(optional_cell(record, sheet.optional("b")), None);
        assert_eq!(
            optional_cell(record, sheet.optional("a")),
            Some("1".to_string())
        );
    }
}

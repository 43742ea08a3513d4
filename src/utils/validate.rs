use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static STUDENT_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("Invalid student number regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验 5 位学号
pub fn validate_student_no(student_no: &str) -> Result<(), &'static str> {
    if !STUDENT_NO_RE.is_match(student_no) {
        return Err("Student number must be exactly 5 digits");
    }
    Ok(())
}

/// 校验 13 位公民身份证号（末位为 mod-11 校验位）
pub fn validate_citizen_id(citizen_id: &str) -> Result<(), &'static str> {
    if citizen_id.len() != 13 || !citizen_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Citizen ID must be exactly 13 digits");
    }

    let digits: Vec<u32> = citizen_id
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .collect();

    // 前 12 位按权重 13..2 加权求和
    let sum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (13 - i as u32))
        .sum();
    let check_digit = (11 - sum % 11) % 10;

    if digits[12] != check_digit {
        return Err("Citizen ID checksum is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_student_no() {
        assert!(validate_student_no("40512").is_ok());
        assert!(validate_student_no("4051").is_err());
        assert!(validate_student_no("405123").is_err());
        assert!(validate_student_no("4051a").is_err());
    }

    #[test]
    fn test_citizen_id_valid() {
        // 1234567890121: (1*13+2*12+3*11+4*10+5*9+6*8+7*7+8*6+9*5+0*4+1*3+2*2) = 352
        // 352 % 11 = 0, (11 - 0) % 10 = 1 → 末位 1
        assert!(validate_citizen_id("1234567890121").is_ok());
    }

    #[test]
    fn test_citizen_id_bad_checksum() {
        assert!(validate_citizen_id("1234567890123").is_err());
    }

    #[test]
    fn test_citizen_id_bad_shape() {
        assert!(validate_citizen_id("12345").is_err());
        assert!(validate_citizen_id("12345678901234").is_err());
        assert!(validate_citizen_id("123456789012x").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("somchai@school.ac.th").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_username() {
        assert!(validate_username("somchai_j").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }
}

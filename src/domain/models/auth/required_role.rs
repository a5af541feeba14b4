/// 라우트 접근에 요구되는 역할 정보
///
/// 역할 간 상하 관계는 없으며 문자열 완전 일치로만 판단합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(String),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role_name: &str) -> bool {
        match self {
            RequiredRole::Single(required_role) => required_role == role_name,
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| role == role_name)
            }
        }
    }
}

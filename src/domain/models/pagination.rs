/// 오프셋 기반 페이지 요청 (1부터 시작)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_SIZE: u64 = 10;

    /// 0 이하의 값은 기본값으로 보정합니다.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: if page == 0 { Self::DEFAULT_PAGE } else { page },
            size: if size == 0 { Self::DEFAULT_SIZE } else { size },
        }
    }

    /// 건너뛸 문서 수
    ///
    /// MongoDB `skip`은 `i64`로 인코딩되므로 `i64::MAX`에서 멈춥니다.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.size)
            .min(i64::MAX as u64)
    }

    /// 전체 건수에 대한 최대 페이지 번호 (최소 1)
    pub fn max_page(&self, total: u64) -> u64 {
        total.div_ceil(self.size).max(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_SIZE)
    }
}

/// 조회된 한 페이지와 다음 페이지 존재 여부
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// `size + 1`개까지 조회한 결과로부터 페이지를 만듭니다.
    pub fn from_overfetch(mut items: Vec<T>, size: u64) -> Self {
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        let has_next = items.len() > size;
        items.truncate(size);
        Self { items, has_next }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            has_next: self.has_next,
        }
    }
}

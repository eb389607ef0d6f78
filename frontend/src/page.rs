/// Top-level pages reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Status,
    History,
    Members,
    Admin,
}

impl Page {
    pub const NAV: [Page; 5] = [Page::Home, Page::Status, Page::History, Page::Members, Page::Admin];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Status => "/status",
            Page::History => "/history",
            Page::Members => "/members",
            Page::Admin => "/admin",
        }
    }

    /// Page for a location pathname; unknown paths land on Home
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        Page::NAV
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or(Page::Home)
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "홈",
            Page::Status => "인증 현황",
            Page::History => "과거 내역",
            Page::Members => "인원 관리",
            Page::Admin => "관리자",
        }
    }

    /// Title and blurb of the home page card
    pub fn card(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Page::Home => None,
            Page::Status => Some(("인증 현황", "멤버 인증 상태 확인 및 변경")),
            Page::History => Some(("과거 인증 내역", "주차별 인증 기록 조회")),
            Page::Members => Some(("인원 관리", "멤버 추가, 수정, 탈퇴 처리")),
            Page::Admin => Some(("관리자 메뉴", "비밀번호, 운영진, 정산 설정")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/status"), Page::Status);
        assert_eq!(Page::from_path("/admin/"), Page::Admin);
        assert_eq!(Page::from_path("/nowhere"), Page::Home);
    }

    #[wasm_bindgen_test]
    fn test_every_page_round_trips() {
        for page in Page::NAV {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}

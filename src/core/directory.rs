use crate::config::DEFAULT_STUDENTS_ENDPOINT;
use crate::core::{fetch, log_load_failure, StudentRecord, Transport};

/// 搜尋表單的三個欄位，建立時就已 trim 並轉小寫
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    name: String,
    major: String,
    interest: String,
}

impl SearchQuery {
    pub fn new(name: &str, major: &str, interest: &str) -> Self {
        Self {
            name: normalize(name),
            major: normalize(major),
            interest: normalize(interest),
        }
    }

    /// 解析 `name|major|interest`，缺的欄位視為空字串
    pub fn parse_line(line: &str) -> Self {
        let mut parts = line.splitn(3, '|');
        let name = parts.next().unwrap_or_default();
        let major = parts.next().unwrap_or_default();
        let interest = parts.next().unwrap_or_default();
        Self::new(name, major, interest)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.major.is_empty() && self.interest.is_empty()
    }

    pub fn matches(&self, record: &StudentRecord) -> bool {
        let name_match =
            self.name.is_empty() || record.full_name().to_lowercase().contains(&self.name);
        let major_match =
            self.major.is_empty() || record.major.to_lowercase().contains(&self.major);
        let interest_match = self.interest.is_empty()
            || record
                .interests
                .iter()
                .any(|interest| interest.to_lowercase().contains(&self.interest));

        name_match && major_match && interest_match
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// 依查詢條件過濾，保留原本順序，不改動輸入
pub fn filter(records: &[StudentRecord], query: &SearchQuery) -> Vec<StudentRecord> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}

pub fn count_label(count: usize) -> String {
    format!("{} student(s)", count)
}

/// 一次頁面工作階段：抓回來的完整名單，加上目前顯示的子集合
#[derive(Debug, Clone, Default)]
pub struct DirectorySession {
    records: Vec<StudentRecord>,
    visible: Vec<StudentRecord>,
}

impl DirectorySession {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self {
            visible: records.clone(),
            records,
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn visible(&self) -> &[StudentRecord] {
        &self.visible
    }

    pub fn count_label(&self) -> String {
        count_label(self.visible.len())
    }

    /// 每次都從完整名單重新過濾，清空欄位就等於取消那個條件
    pub fn search(&mut self, query: &SearchQuery) -> &[StudentRecord] {
        self.visible = filter(&self.records, query);
        tracing::debug!(
            "Search matched {} of {} students",
            self.visible.len(),
            self.records.len()
        );
        &self.visible
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    endpoint: String,
}

impl DirectoryLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// 抓取學生名單；失敗時只記 log，回傳空的 session
    pub async fn load<R: Transport + ?Sized>(&self, transport: &R) -> DirectorySession {
        tracing::info!("Loading students from: {}", self.endpoint);

        match fetch::<Vec<StudentRecord>, _>(transport, &self.endpoint).await {
            Ok(records) => {
                tracing::info!("Loaded {}", count_label(records.len()));
                DirectorySession::new(records)
            }
            Err(e) => {
                log_load_failure("students", &e);
                DirectorySession::default()
            }
        }
    }
}

impl Default for DirectoryLoader {
    fn default() -> Self {
        Self::new(DEFAULT_STUDENTS_ENDPOINT)
    }
}

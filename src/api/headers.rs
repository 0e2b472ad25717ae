use ureq::Request;

pub trait SetNotionHeaders {
    fn set_notion_headers(self, api_key: &str) -> Request;
}

impl SetNotionHeaders for Request {
    fn set_notion_headers(self, api_key: &str) -> Request {
        self.set("Authorization", &format!("Bearer {}", api_key))
            .set("Content-Type", "application/json")
            .set("Notion-Version", "2022-06-28")
    }
}

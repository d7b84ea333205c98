use crate::api::models::{DeleteWord, FlagUpdate, RegisterWord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Every path the backend serves to this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Dashboard,
    Activity,
    Bookmark,
    EnglishList,
    Learning,
    UpdateIsCorrect,
    UpdateBookmark,
    Register,
    Delete,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Dashboard => "/",
            Endpoint::Activity => "/activity",
            Endpoint::Bookmark => "/bookmark",
            Endpoint::EnglishList => "/english_list",
            Endpoint::Learning => "/learning",
            Endpoint::UpdateIsCorrect => "/update/is_correct",
            Endpoint::UpdateBookmark => "/update/bookmark",
            Endpoint::Register => "/register",
            Endpoint::Delete => "/delete",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::Dashboard
            | Endpoint::Activity
            | Endpoint::Bookmark
            | Endpoint::EnglishList
            | Endpoint::Learning => Method::Get,
            Endpoint::UpdateIsCorrect
            | Endpoint::UpdateBookmark
            | Endpoint::Register
            | Endpoint::Delete => Method::Post,
        }
    }
}

/// A single request a view (or the command line) asks the backend to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    Fetch(Endpoint),
    UpdateIsCorrect { pkey: i64 },
    UpdateBookmark { pkey: i64 },
    Register { english: String, japanese: String },
    Delete { pkey: i64 },
}

impl ApiRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiRequest::Fetch(endpoint) => *endpoint,
            ApiRequest::UpdateIsCorrect { .. } => Endpoint::UpdateIsCorrect,
            ApiRequest::UpdateBookmark { .. } => Endpoint::UpdateBookmark,
            ApiRequest::Register { .. } => Endpoint::Register,
            ApiRequest::Delete { .. } => Endpoint::Delete,
        }
    }

    /// JSON body for POST requests, `None` for reads.
    pub fn body(&self) -> Option<serde_json::Value> {
        let value = match self {
            ApiRequest::Fetch(_) => return None,
            ApiRequest::UpdateIsCorrect { pkey } | ApiRequest::UpdateBookmark { pkey } => {
                serde_json::to_value(FlagUpdate::set(*pkey))
            }
            ApiRequest::Register { english, japanese } => serde_json::to_value(RegisterWord {
                eng_val: english.clone(),
                jap_val: japanese.clone(),
            }),
            ApiRequest::Delete { pkey } => serde_json::to_value(DeleteWord { pkey: *pkey }),
        };
        value.ok()
    }

    pub fn is_mutation(&self) -> bool {
        self.endpoint().method() == Method::Post
    }
}

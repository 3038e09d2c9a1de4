//! Endpoint catalog: one `{pathname, method}` pair per kernel route.

use reqwest::Method;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub pathname: &'static str,
    pub method: Method,
}

impl Endpoint {
    const fn post(pathname: &'static str) -> Self {
        Self { pathname, method: Method::POST }
    }
}

pub mod ws {
    /// Broadcast channel path; joined onto the base URL by the channel builder.
    pub const BROADCAST: &str = "/ws/broadcast";
}

pub mod asset {
    use super::Endpoint;

    pub const UPLOAD: Endpoint = Endpoint::post("/api/asset/upload");
}

pub mod attr {
    use super::Endpoint;

    pub const GET_BLOCK_ATTRS: Endpoint = Endpoint::post("/api/attr/getBlockAttrs");
    pub const GET_BOOKMARK_LABELS: Endpoint = Endpoint::post("/api/attr/getBookmarkLabels");
    pub const SET_BLOCK_ATTRS: Endpoint = Endpoint::post("/api/attr/setBlockAttrs");
}

pub mod block {
    use super::Endpoint;

    pub const APPEND_BLOCK: Endpoint = Endpoint::post("/api/block/appendBlock");
    pub const DELETE_BLOCK: Endpoint = Endpoint::post("/api/block/deleteBlock");
    pub const FOLD_BLOCK: Endpoint = Endpoint::post("/api/block/foldBlock");
    pub const GET_BLOCK_BREADCRUMB: Endpoint = Endpoint::post("/api/block/getBlockBreadcrumb");
    pub const GET_BLOCK_DOM: Endpoint = Endpoint::post("/api/block/getBlockDOM");
    pub const GET_BLOCK_INFO: Endpoint = Endpoint::post("/api/block/getBlockInfo");
    pub const GET_BLOCK_KRAMDOWN: Endpoint = Endpoint::post("/api/block/getBlockKramdown");
    pub const GET_CHILD_BLOCKS: Endpoint = Endpoint::post("/api/block/getChildBlocks");
    pub const GET_DOC_INFO: Endpoint = Endpoint::post("/api/block/getDocInfo");
    pub const INSERT_BLOCK: Endpoint = Endpoint::post("/api/block/insertBlock");
    pub const MOVE_BLOCK: Endpoint = Endpoint::post("/api/block/moveBlock");
    pub const PREPEND_BLOCK: Endpoint = Endpoint::post("/api/block/prependBlock");
    pub const TRANSFER_BLOCK_REF: Endpoint = Endpoint::post("/api/block/transferBlockRef");
    pub const UNFOLD_BLOCK: Endpoint = Endpoint::post("/api/block/unfoldBlock");
    pub const UPDATE_BLOCK: Endpoint = Endpoint::post("/api/block/updateBlock");
}

pub mod broadcast {
    use super::Endpoint;

    pub const GET_CHANNEL_INFO: Endpoint = Endpoint::post("/api/broadcast/getChannelInfo");
    pub const GET_CHANNELS: Endpoint = Endpoint::post("/api/broadcast/getChannels");
    pub const POST_MESSAGE: Endpoint = Endpoint::post("/api/broadcast/postMessage");
}

pub mod convert {
    use super::Endpoint;

    pub const PANDOC: Endpoint = Endpoint::post("/api/convert/pandoc");
}

pub mod export {
    use super::Endpoint;

    pub const EXPORT_MD_CONTENT: Endpoint = Endpoint::post("/api/export/exportMdContent");
    pub const EXPORT_RESOURCES: Endpoint = Endpoint::post("/api/export/exportResources");
    pub const EXPORT_HTML: Endpoint = Endpoint::post("/api/export/exportHTML");
}

pub mod file {
    use super::Endpoint;

    pub const GET_FILE: Endpoint = Endpoint::post("/api/file/getFile");
    pub const PUT_FILE: Endpoint = Endpoint::post("/api/file/putFile");
    pub const READ_DIR: Endpoint = Endpoint::post("/api/file/readDir");
    pub const REMOVE_FILE: Endpoint = Endpoint::post("/api/file/removeFile");
    pub const RENAME_FILE: Endpoint = Endpoint::post("/api/file/renameFile");
}

pub mod filetree {
    use super::Endpoint;

    pub const CREATE_DAILY_NOTE: Endpoint = Endpoint::post("/api/filetree/createDailyNote");
    pub const CREATE_DOC_WITH_MD: Endpoint = Endpoint::post("/api/filetree/createDocWithMd");
    pub const GET_DOC: Endpoint = Endpoint::post("/api/filetree/getDoc");
    pub const GET_HPATH_BY_ID: Endpoint = Endpoint::post("/api/filetree/getHPathByID");
    pub const GET_HPATH_BY_PATH: Endpoint = Endpoint::post("/api/filetree/getHPathByPath");
    pub const GET_IDS_BY_HPATH: Endpoint = Endpoint::post("/api/filetree/getIDsByHPath");
    pub const LIST_DOCS_BY_PATH: Endpoint = Endpoint::post("/api/filetree/listDocsByPath");
    pub const MOVE_DOCS: Endpoint = Endpoint::post("/api/filetree/moveDocs");
    pub const REMOVE_DOC: Endpoint = Endpoint::post("/api/filetree/removeDoc");
    pub const RENAME_DOC: Endpoint = Endpoint::post("/api/filetree/renameDoc");
    pub const SEARCH_DOCS: Endpoint = Endpoint::post("/api/filetree/searchDocs");
}

pub mod history {
    use super::Endpoint;

    pub const GET_DOC_HISTORY_CONTENT: Endpoint = Endpoint::post("/api/history/getDocHistoryContent");
    pub const GET_HISTORY_ITEMS: Endpoint = Endpoint::post("/api/history/getHistoryItems");
}

pub mod inbox {
    use super::Endpoint;

    pub const GET_SHORTHAND: Endpoint = Endpoint::post("/api/inbox/getShorthand");
}

pub mod network {
    use super::Endpoint;

    pub const ECHO: Endpoint = Endpoint::post("/api/network/echo");
    pub const FORWARD_PROXY: Endpoint = Endpoint::post("/api/network/forwardProxy");
}

pub mod notebook {
    use super::Endpoint;

    pub const CLOSE_NOTEBOOK: Endpoint = Endpoint::post("/api/notebook/closeNotebook");
    pub const CREATE_NOTEBOOK: Endpoint = Endpoint::post("/api/notebook/createNotebook");
    pub const GET_NOTEBOOK_CONF: Endpoint = Endpoint::post("/api/notebook/getNotebookConf");
    pub const LS_NOTEBOOKS: Endpoint = Endpoint::post("/api/notebook/lsNotebooks");
    pub const OPEN_NOTEBOOK: Endpoint = Endpoint::post("/api/notebook/openNotebook");
    pub const REMOVE_NOTEBOOK: Endpoint = Endpoint::post("/api/notebook/removeNotebook");
    pub const RENAME_NOTEBOOK: Endpoint = Endpoint::post("/api/notebook/renameNotebook");
    pub const SET_NOTEBOOK_CONF: Endpoint = Endpoint::post("/api/notebook/setNotebookConf");
}

pub mod notification {
    use super::Endpoint;

    pub const PUSH_ERR_MSG: Endpoint = Endpoint::post("/api/notification/pushErrMsg");
    pub const PUSH_MSG: Endpoint = Endpoint::post("/api/notification/pushMsg");
}

pub mod outline {
    use super::Endpoint;

    pub const GET_DOC_OUTLINE: Endpoint = Endpoint::post("/api/outline/getDocOutline");
}

pub mod query {
    use super::Endpoint;

    pub const SQL: Endpoint = Endpoint::post("/api/query/sql");
}

pub mod repo {
    use super::Endpoint;

    pub const OPEN_REPO_SNAPSHOT_DOC: Endpoint = Endpoint::post("/api/repo/openRepoSnapshotDoc");
}

pub mod search {
    use super::Endpoint;

    pub const FULL_TEXT_SEARCH_BLOCK: Endpoint = Endpoint::post("/api/search/fullTextSearchBlock");
}

pub mod snippet {
    use super::Endpoint;

    pub const GET_SNIPPET: Endpoint = Endpoint::post("/api/snippet/getSnippet");
    pub const SET_SNIPPET: Endpoint = Endpoint::post("/api/snippet/setSnippet");
}

pub mod sqlite {
    use super::Endpoint;

    pub const FLUSH_TRANSACTION: Endpoint = Endpoint::post("/api/sqlite/flushTransaction");
}

pub mod storage {
    use super::Endpoint;

    pub const GET_LOCAL_STORAGE: Endpoint = Endpoint::post("/api/storage/getLocalStorage");
    pub const GET_RECENT_DOCS: Endpoint = Endpoint::post("/api/storage/getRecentDocs");
    pub const SET_LOCAL_STORAGE: Endpoint = Endpoint::post("/api/storage/setLocalStorage");
    pub const SET_LOCAL_STORAGE_VAL: Endpoint = Endpoint::post("/api/storage/setLocalStorageVal");
}

pub mod system {
    use super::Endpoint;

    pub const BOOT_PROGRESS: Endpoint = Endpoint::post("/api/system/bootProgress");
    pub const CURRENT_TIME: Endpoint = Endpoint::post("/api/system/currentTime");
    pub const EXIT: Endpoint = Endpoint::post("/api/system/exit");
    pub const GET_CONF: Endpoint = Endpoint::post("/api/system/getConf");
    pub const LOGOUT_AUTH: Endpoint = Endpoint::post("/api/system/logoutAuth");
    pub const VERSION: Endpoint = Endpoint::post("/api/system/version");
}

pub mod template {
    use super::Endpoint;

    pub const RENDER: Endpoint = Endpoint::post("/api/template/render");
    pub const RENDER_SPRIG: Endpoint = Endpoint::post("/api/template/renderSprig");
}

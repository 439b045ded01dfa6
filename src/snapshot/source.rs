use async_trait::async_trait;
use crate::core::inventory::{InventoryError, InventoryResult};

// SnapshotSource yields the raw tabular snapshot text; normalization happens
// in the cache so a source only deals in bytes on the wire.
#[async_trait]
pub(crate) trait SnapshotSource: Sync + Send {
    async fn fetch(&self) -> InventoryResult<String>;
}

pub(crate) struct HttpSnapshotSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSnapshotSource {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> InventoryResult<String> {
        let res = self.client.get(self.url.as_str()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(InventoryError::upstream_fetch(
                format!("upstream returned {}", status).as_str(),
                Some(status.as_u16()), status.is_server_error()));
        }
        res.text().await.map_err(InventoryError::from)
    }
}

pub(crate) const SAMPLE_INVENTORY: &str = "\
번호\tISBN\t제목\t저자\t출판사\t정가\t재고
1\t9791162243077\t러스트 프로그래밍 공식 가이드\tSteve Klabnik\t제이펍\t38,000\t4
2\t9788966262472\t클린 코드\tRobert C. Martin\t인사이트\t29,000\t0
3\t9791158392239\t한 권으로 읽는 컴퓨터 구조와 프로그래밍\tJonathan E. Steinhart\t책만\t32,000\t2
4\t9788968482694\tHTTP 완벽 가이드\tDavid Gourley\t인사이트\t45,000\t1
5\t9791189909321\t실용주의 프로그래머\tDavid Thomas\t인사이트\t33,000\t7
6\t9791162242964\t데이터 중심 애플리케이션 설계\tMartin Kleppmann\t위키북스\t48,000\t0
7\t9788998139766\tSQL 전문가 가이드\t한국데이터산업진흥원\t한국데이터산업진흥원\t50,000\t3
8\t9791190665216\t파이썬으로 배우는 알고리즘\t김철수\t한빛미디어\t27,000\t5";

// FixtureSnapshotSource serves a bundled snapshot so the service and its
// tests run without a network.
pub(crate) struct FixtureSnapshotSource {
    payload: String,
}

impl FixtureSnapshotSource {
    pub(crate) fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
        }
    }

    pub(crate) fn sample() -> Self {
        Self::new(SAMPLE_INVENTORY)
    }
}

#[async_trait]
impl SnapshotSource for FixtureSnapshotSource {
    async fn fetch(&self) -> InventoryResult<String> {
        Ok(self.payload.clone())
    }
}

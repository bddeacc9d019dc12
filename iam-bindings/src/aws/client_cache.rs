//! Process-wide IAM client cache, one client per distinct credentials value.

use crate::aws::credentials::Credentials;
use crate::error::IamBindingsResult;
use aws_sdk_iam::Client as IamClient;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tokio::sync::OnceCell;

/// Memoizes one value per credentials key.
///
/// The map lock is only held to fetch or insert a key's cell; construction runs
/// inside the cell, so concurrent first use of a key still builds it once.
pub(crate) struct ClientCache<C> {
    cells: Mutex<HashMap<Credentials, Arc<OnceCell<C>>>>,
}

impl<C: Clone> ClientCache<C> {
    pub(crate) fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn get_or_try_init<F, Fut>(
        &self,
        credentials: &Credentials,
        init: F,
    ) -> IamBindingsResult<C>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = IamBindingsResult<C>>,
    {
        let cell = {
            let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(cells.entry(credentials.clone()).or_default())
        };

        if let Some(value) = cell.get() {
            log::debug!("Reusing cached IAM client for {credentials:?}");
            return Ok(value.clone());
        }

        match cell.get_or_try_init(init).await {
            Ok(value) => Ok(value.clone()),
            Err(err) => {
                self.evict_uninitialized(credentials, &cell);
                Err(err)
            }
        }
    }

    // A failed key must not stay in the map for the life of the process.
    fn evict_uninitialized(&self, credentials: &Credentials, cell: &Arc<OnceCell<C>>) {
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        let stale = cells
            .get(credentials)
            .is_some_and(|current| Arc::ptr_eq(current, cell) && !current.initialized());
        if stale {
            cells.remove(credentials);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn clients() -> &'static ClientCache<IamClient> {
    static CLIENTS: OnceLock<ClientCache<IamClient>> = OnceLock::new();
    CLIENTS.get_or_init(ClientCache::new)
}

/// The cached IAM client for `credentials`, constructing it on first use.
pub(crate) async fn client_for(credentials: &Credentials) -> IamBindingsResult<IamClient> {
    clients()
        .get_or_try_init(credentials, || async {
            log::debug!("Constructing IAM client for {credentials:?}");
            let config = credentials.load_sdk_config().await?;
            Ok(IamClient::new(&config))
        })
        .await
}

//! User data stream endpoints
//!
//! These manage the listen key used to open a private stream. They need an
//! API key but are not signed.

use tracing::{debug, instrument};

use crate::catalog;
use crate::dispatch::{DispatchOptions, Dispatcher};
use crate::error::RestResult;
use crate::params::Params;
use crate::types::ListenKey;

/// User data stream endpoints
pub struct UserStreamEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> UserStreamEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Start a new user data stream
    ///
    /// The listen key stays valid for 60 minutes unless kept alive.
    #[instrument(skip(self))]
    pub async fn start(&self) -> RestResult<ListenKey> {
        debug!("Starting user data stream");
        self.dispatcher
            .dispatch(
                &catalog::START_USER_DATA_STREAM,
                &Params::new(),
                &DispatchOptions::default(),
            )
            .await?
            .decode()
    }

    /// Extend a listen key's validity by 60 minutes
    #[instrument(skip(self, listen_key))]
    pub async fn keep_alive(&self, listen_key: &str) -> RestResult<()> {
        let params = Params::new().with("listenKey", listen_key);
        self.dispatcher
            .dispatch(
                &catalog::KEEP_ALIVE_USER_DATA_STREAM,
                &params,
                &DispatchOptions::default(),
            )
            .await?;
        Ok(())
    }

    /// Close a user data stream
    #[instrument(skip(self, listen_key))]
    pub async fn close(&self, listen_key: &str) -> RestResult<()> {
        let params = Params::new().with("listenKey", listen_key);
        self.dispatcher
            .dispatch(
                &catalog::CLOSE_USER_DATA_STREAM,
                &params,
                &DispatchOptions::default(),
            )
            .await?;
        Ok(())
    }
}

//! Native transaction builder backing the console facades

mod builder;
mod client;

pub use builder::NativeBuilder;
pub use client::{NodeClient, RpcError, RpcResponse};

use crate::account::Account;
use crate::config::BuilderConfig;
use crate::error::WasmEllError;
use crate::facade::TxFacade;
use crate::registry::{AnyBuilder, BuilderRegistry, BALANCE_KEY, TICKET_BID_KEY};
use crate::types::TxType;
use std::fmt;
use std::rc::Rc;

/// State shared by every builder created from one console session
pub struct BuilderContext {
    account: Option<Account>,
    client: Rc<dyn NodeClient>,
    config: BuilderConfig,
    clock: fn() -> i64,
}

impl BuilderContext {
    pub fn new(account: Option<Account>, client: Rc<dyn NodeClient>, config: BuilderConfig) -> Self {
        BuilderContext {
            account,
            client,
            config,
            clock: unix_now,
        }
    }

    /// Replace the source of transaction timestamps
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &dyn NodeClient {
        self.client.as_ref()
    }

    pub(crate) fn now(&self) -> i64 {
        (self.clock)()
    }
}

impl fmt::Debug for BuilderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderContext")
            .field("account", &self.account.as_ref().map(Account::address))
            .field("config", &self.config)
            .finish()
    }
}

/// Registry with the `balance` and `ticketBid` builders of a session
pub fn native_registry(
    ctx: Rc<BuilderContext>,
) -> Result<BuilderRegistry<AnyBuilder<NativeBuilder>>, WasmEllError> {
    let mut registry = BuilderRegistry::new();

    let balance_ctx = ctx.clone();
    registry.register(BALANCE_KEY, move || {
        let engine = NativeBuilder::new(balance_ctx.clone(), TxType::Balance)?;
        Ok(AnyBuilder::Balance(TxFacade::new(engine)))
    })?;

    let bid_ctx = ctx;
    registry.register(TICKET_BID_KEY, move || {
        let engine = NativeBuilder::new(bid_ctx.clone(), TxType::TicketBid)?;
        Ok(AnyBuilder::Transfer(TxFacade::new(engine)))
    })?;

    Ok(registry)
}

/// Current unix time in seconds
pub fn unix_now() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default()
    }
}

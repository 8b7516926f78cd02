//! Client for the BTC-e / WEX exchange HTTP API.
//!
//! ```rust,no_run
//! use btce::{build_connector, ExchangeConfig, OrderSide, PublicOptions};
//!
//! # async fn example() -> Result<(), btce::ExchangeError> {
//! let connector = build_connector(ExchangeConfig::from_env("BTCE")?)?;
//!
//! let ticker = connector.market.ticker(&["btc_usd"], PublicOptions::default()).await?;
//! println!("BTC buy price: {:.3}", ticker["btc_usd"].buy);
//!
//! match connector.trading.active_orders(Some("btc_usd")).await {
//!     Ok(orders) => println!("{} open orders", orders.len()),
//!     Err(err) if err.api_message() == Some("no orders") => println!("no open orders"),
//!     Err(err) => return Err(err),
//! }
//!
//! let order = connector.trading.trade("btc_usd", OrderSide::Buy, 900.0, 0.01).await?;
//! println!("order {} placed", order.order_id);
//! # Ok(())
//! # }
//! ```
pub mod core;
pub mod exchanges;

pub use core::{
    config::{ExchangeConfig, Venue},
    errors::{ApiError, ExchangeError},
};
pub use exchanges::btce::*;

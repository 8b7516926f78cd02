//! BTC-e API v3 client, also serving WEX which kept the same API.
//!
//! Public market data goes through [`MarketData`]; account and order methods
//! go through [`Trading`], which signs each request with the API secret and a
//! fresh nonce.
pub mod builder;
pub mod codec;
pub mod connector;
pub mod rest;
pub mod types;

// Re-export main components
pub use builder::{build_connector, BtceBuilder};
pub use codec::{decode_envelope, decode_public, encode_request};
pub use connector::{BtceConnector, MarketData, Trading};
pub use types::{
    AccountInfo, ActiveOrder, ActiveOrders, CancelOrder, CreateCoupon, Depth, DepthItem, DepthPair,
    Envelope, HistoryFilter, Info, InfoPair, OrderInfo, OrderInfoItem, OrderSide, PublicOptions,
    PublicTrade, RedeemCoupon, Rights, SortOrder, Ticker, TickerPair, TradeHistory,
    TradeHistoryItem, TradeResponse, TradeResult, Trades, TransactionHistory,
    TransactionHistoryItem, WithdrawCoin,
};

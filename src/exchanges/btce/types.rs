use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

/// Generic wrapper around every trading API response
#[derive(Debug, Deserialize, Serialize)]
pub struct Envelope {
    pub success: i64,
    #[serde(rename = "return", default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

mod sealed {
    pub trait Sealed {}
}

/// Result shape of one trading API method.
///
/// Only the types in this module implement it, so `BtceRest::call` can only
/// decode into a known response shape.
pub trait TradeResult: DeserializeOwned + sealed::Sealed {
    /// Value of the `method` form field
    const METHOD: &'static str;
}

macro_rules! trade_result {
    ($ty:ty, $method:literal) => {
        impl sealed::Sealed for $ty {}

        impl TradeResult for $ty {
            const METHOD: &'static str = $method;
        }
    };
}

macro_rules! keyed_by_id {
    ($name:ident, $item:ty) => {
        #[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub HashMap<String, $item>);

        impl Deref for $name {
            type Target = HashMap<String, $item>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl IntoIterator for $name {
            type Item = (String, $item);
            type IntoIter = std::collections::hash_map::IntoIter<String, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Trading API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Paging and time-range filter for the history methods.
///
/// Unset fields are left out of the request and the exchange defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Number of records to skip
    pub from: Option<u64>,
    /// Number of records to return
    pub count: Option<u64>,
    pub from_id: Option<u64>,
    pub end_id: Option<u64>,
    pub order: Option<SortOrder>,
    pub since: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl HistoryFilter {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                params.insert(key.to_string(), value);
            }
        };

        put("from", self.from.map(|v| v.to_string()));
        put("count", self.count.map(|v| v.to_string()));
        put("from_id", self.from_id.map(|v| v.to_string()));
        put("end_id", self.end_id.map(|v| v.to_string()));
        put("order", self.order.map(|o| o.as_str().to_string()));
        put("since", self.since.map(|t| t.timestamp().to_string()));
        put("end", self.end.map(|t| t.timestamp().to_string()));
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rights {
    pub info: u8,
    pub trade: u8,
    pub withdraw: u8,
}

impl Rights {
    pub const fn can_trade(&self) -> bool {
        self.trade == 1
    }

    pub const fn can_withdraw(&self) -> bool {
        self.withdraw == 1
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub funds: HashMap<String, f64>,
    pub rights: Rights,
    pub transaction_count: i64,
    pub open_orders: i64,
    pub server_time: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeResponse {
    pub received: f64,
    pub remains: f64,
    /// 0 when the order was filled immediately
    pub order_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActiveOrder {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub amount: f64,
    pub rate: f64,
    pub timestamp_created: i64,
    pub status: i32,
}

keyed_by_id!(ActiveOrders, ActiveOrder);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OrderInfoItem {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub start_amount: f64,
    pub amount: f64,
    pub rate: f64,
    pub timestamp_created: i64,
    pub status: i32,
}

keyed_by_id!(OrderInfo, OrderInfoItem);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CancelOrder {
    pub order_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeHistoryItem {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub amount: f64,
    pub rate: f64,
    pub order_id: u64,
    pub is_your_order: u8,
    pub timestamp: i64,
}

keyed_by_id!(TradeHistory, TradeHistoryItem);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionHistoryItem {
    #[serde(rename = "type")]
    pub kind: i32,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub status: i32,
    pub timestamp: i64,
}

keyed_by_id!(TransactionHistory, TransactionHistoryItem);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WithdrawCoin {
    #[serde(rename = "tId")]
    pub transaction_id: u64,
    #[serde(rename = "amountSent")]
    pub amount_sent: f64,
    #[serde(default)]
    pub funds: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateCoupon {
    pub coupon: String,
    #[serde(rename = "transID")]
    pub transaction_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCoupon {
    pub coupon_amount: String,
    pub coupon_currency: String,
    #[serde(rename = "transID")]
    pub transaction_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, f64>,
}

trade_result!(AccountInfo, "getInfo");
trade_result!(TradeResponse, "Trade");
trade_result!(ActiveOrders, "ActiveOrders");
trade_result!(OrderInfo, "OrderInfo");
trade_result!(CancelOrder, "CancelOrder");
trade_result!(TradeHistory, "TradeHistory");
trade_result!(TransactionHistory, "TransHistory");
trade_result!(WithdrawCoin, "WithdrawCoin");
trade_result!(CreateCoupon, "CreateCoupon");
trade_result!(RedeemCoupon, "RedeemCoupon");

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Optional query parameters accepted by the public pair endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicOptions {
    /// Skip unknown pairs instead of failing the whole request
    pub ignore_invalid: bool,
    /// Maximum number of rows (depth and trades only)
    pub limit: Option<u32>,
}

impl PublicOptions {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.ignore_invalid {
            query.push(("ignore_invalid", "1".to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TickerPair {
    pub high: f64,
    pub low: f64,
    pub avg: f64,
    pub vol: f64,
    pub vol_cur: f64,
    pub last: f64,
    pub buy: f64,
    pub sell: f64,
    pub updated: i64,
}

pub type Ticker = HashMap<String, TickerPair>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InfoPair {
    pub decimal_places: u32,
    pub min_price: f64,
    pub max_price: f64,
    pub min_amount: f64,
    pub hidden: u8,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Info {
    pub server_time: i64,
    pub pairs: HashMap<String, InfoPair>,
}

/// One order book level, sent as `[price, amount]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DepthItem(pub f64, pub f64);

impl DepthItem {
    pub const fn price(&self) -> f64 {
        self.0
    }

    pub const fn amount(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DepthPair {
    #[serde(default)]
    pub asks: Vec<DepthItem>,
    #[serde(default)]
    pub bids: Vec<DepthItem>,
}

pub type Depth = HashMap<String, DepthPair>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PublicTrade {
    /// `ask` or `bid`
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub amount: f64,
    pub tid: u64,
    pub timestamp: i64,
}

pub type Trades = HashMap<String, Vec<PublicTrade>>;

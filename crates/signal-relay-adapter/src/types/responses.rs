/*
[INPUT]:  Binance REST response bodies
[OUTPUT]: Typed Rust response structs with deserialization support
[POS]:    Data layer - wire types for Binance spot and USD-M futures
[UPDATE]: When Binance response schema changes
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeInfoResponse {
    pub symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    /// Present on futures only (`PERPETUAL`, `CURRENT_QUARTER`, ...)
    #[serde(default)]
    pub contract_type: Option<String>,
}

impl SymbolEntry {
    pub fn is_trading(&self) -> bool {
        self.status == "TRADING"
    }

    pub fn is_perpetual_or_spot(&self) -> bool {
        match self.contract_type.as_deref() {
            None => true,
            Some(kind) => kind == "PERPETUAL",
        }
    }
}

/// Order placement result (`newOrderRespType=RESULT`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceOrderResponse {
    pub symbol: String,
    pub order_id: i64,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub transact_time: Option<i64>,
    #[serde(default)]
    pub update_time: Option<i64>,
    #[serde(with = "rust_decimal::serde::str")]
    pub orig_qty: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_qty: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub avg_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub cummulative_quote_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub close_position: bool,
    pub status: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
}

impl BinanceOrderResponse {
    /// Average fill price, from `avgPrice` (futures) or quote/base totals (spot)
    pub fn average_price(&self) -> Option<Decimal> {
        if let Some(avg) = self.avg_price.filter(|avg| !avg.is_zero()) {
            return Some(avg);
        }
        match self.cummulative_quote_qty {
            Some(quote) if !self.executed_qty.is_zero() => Some(quote / self.executed_qty),
            _ => None,
        }
    }
}

/// Conditional order accepted by the USD-M Algo Order service
///
/// POST /fapi/v1/algoOrder with `algoType=CONDITIONAL`. Numeric fields are
/// strings that may be empty (e.g. `quantity` with `closePosition=true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceAlgoOrderResponse {
    pub algo_id: i64,
    #[serde(default)]
    pub client_algo_id: Option<String>,
    #[serde(default)]
    pub algo_type: Option<String>,
    pub order_type: String,
    pub symbol: String,
    pub side: String,
    #[serde(default)]
    pub quantity: Option<String>,
    pub algo_status: String,
    #[serde(default)]
    pub trigger_price: Option<String>,
    #[serde(default)]
    pub working_type: Option<String>,
    #[serde(default)]
    pub close_position: bool,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub update_time: Option<i64>,
}

impl BinanceAlgoOrderResponse {
    /// Order quantity; zero for close-position triggers
    pub fn quantity(&self) -> Decimal {
        parse_decimal(self.quantity.as_deref()).unwrap_or(Decimal::ZERO)
    }

    pub fn trigger_price(&self) -> Option<Decimal> {
        parse_decimal(self.trigger_price.as_deref()).filter(|price| !price.is_zero())
    }
}

fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_order_response_average() {
        let body = r#"{
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1507725176595,
            "price": "0.00000000",
            "origQty": "2.00000000",
            "executedQty": "2.00000000",
            "cummulativeQuoteQty": "130000.00000000",
            "status": "FILLED",
            "timeInForce": "GTC",
            "type": "MARKET",
            "side": "BUY"
        }"#;

        let response: BinanceOrderResponse = serde_json::from_str(body).expect("spot response");
        assert_eq!(response.order_id, 28);
        assert_eq!(response.average_price(), Some("65000".parse().unwrap()));
        assert!(!response.reduce_only);
    }

    #[test]
    fn test_futures_order_response_average() {
        let body = r#"{
            "orderId": 4611875134427365377,
            "symbol": "BTCUSDT",
            "status": "FILLED",
            "clientOrderId": "abc",
            "price": "0",
            "avgPrice": "64950.10",
            "origQty": "0.010",
            "executedQty": "0.010",
            "cumQuote": "649.50100",
            "timeInForce": "GTC",
            "type": "MARKET",
            "reduceOnly": false,
            "closePosition": false,
            "side": "BUY",
            "positionSide": "BOTH",
            "stopPrice": "0",
            "workingType": "CONTRACT_PRICE",
            "origType": "MARKET",
            "updateTime": 1700000000000
        }"#;

        let response: BinanceOrderResponse = serde_json::from_str(body).expect("futures response");
        assert_eq!(response.average_price(), Some("64950.10".parse().unwrap()));
        assert_eq!(response.update_time, Some(1_700_000_000_000));
        assert_eq!(response.transact_time, None);
    }

    #[test]
    fn test_unfilled_order_has_no_average() {
        let body = r#"{
            "orderId": 7,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "avgPrice": "0.00000",
            "origQty": "0",
            "executedQty": "0",
            "type": "STOP_MARKET",
            "side": "SELL",
            "stopPrice": "60000",
            "closePosition": true,
            "updateTime": 1700000000000
        }"#;

        let response: BinanceOrderResponse = serde_json::from_str(body).expect("trigger response");
        assert_eq!(response.average_price(), None);
        assert!(response.close_position);
        assert_eq!(response.stop_price, Some("60000".parse().unwrap()));
    }

    #[test]
    fn test_algo_order_response() {
        let body = r#"{
            "algoId": 2146760,
            "clientAlgoId": "6B2I9XVcJpCjqPAJ4YoFX7",
            "algoType": "CONDITIONAL",
            "orderType": "STOP_MARKET",
            "symbol": "BTCUSDT",
            "side": "SELL",
            "positionSide": "BOTH",
            "timeInForce": "GTC",
            "quantity": "",
            "algoStatus": "NEW",
            "triggerPrice": "60000.00",
            "price": "0",
            "icebergQuantity": null,
            "workingType": "MARK_PRICE",
            "priceMatch": "NONE",
            "closePosition": true,
            "priceProtect": false,
            "reduceOnly": false,
            "activatePrice": "",
            "callbackRate": "",
            "createTime": 1750485492076,
            "updateTime": 1750485492076,
            "triggerTime": 0,
            "goodTillDate": 0
        }"#;

        let response: BinanceAlgoOrderResponse = serde_json::from_str(body).expect("algo response");
        assert_eq!(response.algo_id, 2146760);
        assert_eq!(response.algo_status, "NEW");
        assert_eq!(response.quantity(), Decimal::ZERO);
        assert_eq!(response.trigger_price(), Some("60000".parse().unwrap()));
        assert!(response.close_position);
    }
}

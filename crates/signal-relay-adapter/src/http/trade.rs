/*
[INPUT]:  Unified order requests with optional attached triggers
[OUTPUT]: Unified order objects built from Binance order and algo order results
[POS]:    HTTP layer - trading endpoints (require API key + HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{AdapterError, BinanceClient, Result};
use crate::types::{
    BinanceAlgoOrderResponse, BinanceOrderResponse, CreateOrderRequest, Market, MarketType, Order,
    OrderStatus, OrderType, Side, TriggerParams,
};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use rust_decimal::Decimal;
use tracing::{error, info};

/// USD-M conditional orders live on the Algo Order service
const ALGO_ORDER_ENDPOINT: &str = "/fapi/v1/algoOrder";

impl BinanceClient {
    /// Create a market order, then place any attached triggers
    ///
    /// POST /api/v3/order (spot) or POST /fapi/v1/order (futures) for the entry.
    /// Triggers are futures-only `STOP_MARKET` / `TAKE_PROFIT_MARKET` algo
    /// orders on the opposite side with `closePosition=true`.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<Order> {
        let side: Side = req.side.parse().map_err(AdapterError::InvalidOrder)?;
        validate(&req, self.market_type())?;
        let market = self.market(&req.symbol).await?;

        let params = vec![
            ("symbol", market.id.clone()),
            ("side", side.as_binance().to_string()),
            ("type", req.order_type.as_binance().to_string()),
            ("quantity", format_decimal(req.amount)),
            ("newClientOrderId", self.signer()?.client_order_id()),
            ("newOrderRespType", "RESULT".to_string()),
        ];

        info!(
            symbol = %market.symbol,
            market_id = %market.id,
            side = %side,
            amount = %req.amount,
            "placing entry order"
        );
        let raw = self.place_entry(&params).await?;
        let mut order = to_order(raw, &market)?;
        info!(order_id = %order.id, status = ?order.status, "entry order placed");

        if let Some(trigger) = &req.stop_loss {
            order.stop_loss = Some(Box::new(
                self.place_trigger(&market, side, trigger, &order.id).await?,
            ));
        }
        if let Some(trigger) = &req.take_profit {
            order.take_profit = Some(Box::new(
                self.place_trigger(&market, side, trigger, &order.id).await?,
            ));
        }

        Ok(order)
    }

    async fn place_trigger(
        &self,
        market: &Market,
        entry_side: Side,
        trigger: &TriggerParams,
        entry_order_id: &str,
    ) -> Result<Order> {
        let order_type = OrderType::from(trigger.kind);
        let params = vec![
            ("algoType", "CONDITIONAL".to_string()),
            ("symbol", market.id.clone()),
            ("side", entry_side.opposite().as_binance().to_string()),
            ("type", order_type.as_binance().to_string()),
            ("triggerPrice", format_decimal(trigger.trigger_price)),
            ("closePosition", "true".to_string()),
            ("workingType", "MARK_PRICE".to_string()),
            ("clientAlgoId", self.signer()?.client_order_id()),
        ];

        self.place_algo(&params)
            .await
            .and_then(|raw| to_algo_order(raw, market))
            .inspect(|order| {
                info!(
                    algo_id = %order.id,
                    kind = %trigger.kind,
                    trigger_price = %trigger.trigger_price,
                    "attached trigger placed"
                );
            })
            .map_err(|err| {
                error!(
                    entry_order_id,
                    kind = %trigger.kind,
                    error = %err,
                    "attached trigger rejected"
                );
                AdapterError::TriggerRejected {
                    entry_order_id: entry_order_id.to_string(),
                    trigger: trigger.kind.to_string(),
                    source: Box::new(err),
                }
            })
    }

    async fn place_entry(&self, params: &[(&str, String)]) -> Result<serde_json::Value> {
        let endpoint = match self.market_type() {
            MarketType::Spot => "/api/v3/order",
            MarketType::Future => "/fapi/v1/order",
        };
        let builder = self.signed_request(Method::POST, endpoint, params)?;
        self.send_json(builder).await
    }

    async fn place_algo(&self, params: &[(&str, String)]) -> Result<serde_json::Value> {
        let builder = self.signed_request(Method::POST, ALGO_ORDER_ENDPOINT, params)?;
        self.send_json(builder).await
    }
}

fn validate(req: &CreateOrderRequest, market_type: MarketType) -> Result<()> {
    if req.amount <= Decimal::ZERO {
        return Err(AdapterError::InvalidOrder(format!(
            "amount must be positive, got {}",
            req.amount
        )));
    }
    if req.order_type != OrderType::Market {
        return Err(AdapterError::InvalidOrder(format!(
            "entry order type must be market, got {:?}",
            req.order_type
        )));
    }
    if let Some(trigger) = req.triggers().find(|t| t.trigger_price <= Decimal::ZERO) {
        return Err(AdapterError::InvalidOrder(format!(
            "{} trigger price must be positive, got {}",
            trigger.kind, trigger.trigger_price
        )));
    }
    if market_type == MarketType::Spot && req.has_triggers() {
        return Err(AdapterError::NotSupported(
            "attached stop-loss/take-profit orders require the futures market".to_string(),
        ));
    }
    Ok(())
}

fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn format_datetime(timestamp: Option<i64>) -> Option<String> {
    timestamp
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn to_order(raw: serde_json::Value, market: &Market) -> Result<Order> {
    let response: BinanceOrderResponse = serde_json::from_value(raw.clone())?;

    let order_type = OrderType::from_binance(&response.order_type).ok_or_else(|| {
        AdapterError::InvalidResponse(format!("unknown order type '{}'", response.order_type))
    })?;
    let side: Side = response.side.parse().map_err(AdapterError::InvalidResponse)?;
    let status = OrderStatus::from_binance(&response.status).ok_or_else(|| {
        AdapterError::InvalidResponse(format!("unknown order status '{}'", response.status))
    })?;

    let timestamp = response.transact_time.or(response.update_time);

    Ok(Order {
        id: response.order_id.to_string(),
        client_order_id: response.client_order_id.clone(),
        timestamp,
        datetime: format_datetime(timestamp),
        symbol: market.symbol.clone(),
        order_type,
        side,
        amount: response.orig_qty,
        filled: response.executed_qty,
        average: response.average_price(),
        trigger_price: response.stop_price.filter(|price| !price.is_zero()),
        reduce_only: response.reduce_only || response.close_position,
        status,
        stop_loss: None,
        take_profit: None,
        info: raw,
    })
}

fn to_algo_order(raw: serde_json::Value, market: &Market) -> Result<Order> {
    let response: BinanceAlgoOrderResponse = serde_json::from_value(raw.clone())?;

    let order_type = OrderType::from_binance(&response.order_type).ok_or_else(|| {
        AdapterError::InvalidResponse(format!("unknown algo order type '{}'", response.order_type))
    })?;
    let side: Side = response.side.parse().map_err(AdapterError::InvalidResponse)?;
    let status = OrderStatus::from_binance_algo(&response.algo_status).ok_or_else(|| {
        AdapterError::InvalidResponse(format!("unknown algo status '{}'", response.algo_status))
    })?;

    let timestamp = response.update_time.or(response.create_time);

    Ok(Order {
        id: response.algo_id.to_string(),
        client_order_id: response.client_algo_id.clone(),
        timestamp,
        datetime: format_datetime(timestamp),
        symbol: market.symbol.clone(),
        order_type,
        side,
        amount: response.quantity(),
        filled: Decimal::ZERO,
        average: None,
        trigger_price: response.trigger_price(),
        reduce_only: response.reduce_only || response.close_position,
        status,
        stop_loss: None,
        take_profit: None,
        info: raw,
    })
}

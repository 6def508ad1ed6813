//! Order adaptation in both directions.
//!
//! Outbound: generic market, limit and stop orders become request payloads.
//! Inbound: plain and conditional venue orders become [`LimitOrder`]s.
//!
//! The two inbound shapes differ in which price becomes the limit price
//! (execution limit vs trigger price) and in the flags they can carry. IOC
//! and post-only exist only on plain orders; retry-until-filled only on
//! conditional ones.

use std::collections::BTreeSet;

use tracing::trace;

use super::enums::{
    intention_to_conditional_type, order_type_to_side, side_to_order_type, status_to_status,
};
use super::symbol::to_market_symbol;
use crate::domain::{
    CurrencyPair, Intention, LimitOrder, MarketOrder, OpenOrders, OrderFlag, StopOrder,
};
use crate::error::Result;
use crate::models::{
    FtxConditionalOrderDto, FtxConditionalOrderRequestPayload,
    FtxModifyConditionalOrderRequestPayload, FtxModifyOrderRequestPayload, FtxOrderDto,
    FtxOrderRequestPayload, FtxOrderType,
};

/// Builds the `POST /orders` body for a market order.
#[must_use]
pub fn adapt_market_order_payload(order: &MarketOrder) -> FtxOrderRequestPayload {
    FtxOrderRequestPayload {
        market: to_market_symbol(&order.instrument),
        side: order_type_to_side(order.order_type),
        price: None,
        order_type: FtxOrderType::Market,
        size: order.original_amount,
        reduce_only: order.has_flag(OrderFlag::ReduceOnly),
        ioc: order.has_flag(OrderFlag::Ioc),
        post_only: order.has_flag(OrderFlag::PostOnly),
        client_id: order.user_reference.clone(),
    }
}

/// Builds the `POST /orders` body for a limit order.
#[must_use]
pub fn adapt_limit_order_payload(order: &LimitOrder) -> FtxOrderRequestPayload {
    FtxOrderRequestPayload {
        market: to_market_symbol(&order.instrument),
        side: order_type_to_side(order.order_type),
        price: order.limit_price,
        order_type: FtxOrderType::Limit,
        size: order.original_amount,
        reduce_only: order.has_flag(OrderFlag::ReduceOnly),
        ioc: order.has_flag(OrderFlag::Ioc),
        post_only: order.has_flag(OrderFlag::PostOnly),
        client_id: order.user_reference.clone(),
    }
}

/// Builds the modify body for a resting limit order.
#[must_use]
pub fn adapt_modify_order_payload(order: &LimitOrder) -> FtxModifyOrderRequestPayload {
    FtxModifyOrderRequestPayload {
        price: order.limit_price,
        size: order.original_amount,
        client_id: order.user_reference.clone(),
    }
}

/// Builds the `POST /conditional_orders` body for a stop order.
///
/// A stop order without an intention is placed as a stop-loss.
///
/// # Errors
///
/// Returns [`AdapterError::UnsupportedIntention`](crate::AdapterError::UnsupportedIntention)
/// for trailing stops. The order must be rejected before submission.
pub fn adapt_stop_order_payload(order: &StopOrder) -> Result<FtxConditionalOrderRequestPayload> {
    let intention = order.intention.unwrap_or(Intention::StopLoss);

    Ok(FtxConditionalOrderRequestPayload {
        market: to_market_symbol(&order.instrument),
        side: order_type_to_side(order.order_type),
        size: order.original_amount,
        order_type: intention_to_conditional_type(intention)?,
        reduce_only: order.has_flag(OrderFlag::ReduceOnly),
        retry_until_filled: order.has_flag(OrderFlag::RetryUntilFilled),
        order_price: order.limit_price,
        trigger_price: order.stop_price,
        trail_value: None,
    })
}

/// Builds the modify body for a resting conditional order.
#[must_use]
pub fn adapt_modify_conditional_order_payload(
    order: &StopOrder,
) -> FtxModifyConditionalOrderRequestPayload {
    FtxModifyConditionalOrderRequestPayload {
        order_price: order.limit_price,
        trigger_price: order.stop_price,
        trail_value: None,
        size: order.original_amount,
    }
}

/// Converts a plain venue order.
///
/// # Errors
///
/// Returns [`AdapterError::MalformedMarket`](crate::AdapterError::MalformedMarket)
/// if the market name cannot be parsed.
pub fn adapt_limit_order(order: &FtxOrderDto) -> Result<LimitOrder> {
    let mut flags = BTreeSet::new();
    if order.ioc {
        flags.insert(OrderFlag::Ioc);
    }
    if order.post_only {
        flags.insert(OrderFlag::PostOnly);
    }
    if order.reduce_only {
        flags.insert(OrderFlag::ReduceOnly);
    }

    Ok(LimitOrder {
        order_type: side_to_order_type(order.side),
        instrument: order.market.parse::<CurrencyPair>()?,
        original_amount: order.size,
        limit_price: order.price,
        cumulative_amount: Some(order.filled_size),
        remaining_amount: Some(order.remaining_size),
        average_price: order.avg_fill_price,
        status: Some(status_to_status(order.status)),
        flags,
        user_reference: order.client_id.clone(),
        id: order.id.to_string(),
        timestamp: Some(order.created_at),
    })
}

/// Converts a conditional venue order. The trigger price becomes the limit
/// price and the remaining amount is left unset.
///
/// # Errors
///
/// Returns [`AdapterError::MalformedMarket`](crate::AdapterError::MalformedMarket)
/// if the market name cannot be parsed.
pub fn adapt_conditional_limit_order(order: &FtxConditionalOrderDto) -> Result<LimitOrder> {
    let mut flags = BTreeSet::new();
    if order.retry_until_filled {
        flags.insert(OrderFlag::RetryUntilFilled);
    }
    if order.reduce_only {
        flags.insert(OrderFlag::ReduceOnly);
    }

    Ok(LimitOrder {
        order_type: side_to_order_type(order.side),
        instrument: order.market.parse::<CurrencyPair>()?,
        original_amount: order.size,
        limit_price: order.trigger_price,
        cumulative_amount: Some(order.filled_size),
        remaining_amount: None,
        average_price: order.avg_fill_price,
        status: Some(status_to_status(order.status)),
        flags,
        user_reference: None,
        id: order.id.to_string(),
        timestamp: Some(order.created_at),
    })
}

/// Converts the account's resting plain orders.
///
/// # Errors
///
/// Fails on the first order whose market name cannot be parsed.
pub fn adapt_open_orders(orders: &[FtxOrderDto]) -> Result<OpenOrders> {
    let open_orders = orders
        .iter()
        .map(adapt_limit_order)
        .collect::<Result<Vec<_>>>()?;

    trace!(count = open_orders.len(), "Adapted open orders");
    Ok(OpenOrders { open_orders })
}

/// Converts the account's resting conditional orders.
///
/// # Errors
///
/// Fails on the first order whose market name cannot be parsed.
pub fn adapt_trigger_open_orders(orders: &[FtxConditionalOrderDto]) -> Result<OpenOrders> {
    let open_orders = orders
        .iter()
        .map(adapt_conditional_limit_order)
        .collect::<Result<Vec<_>>>()?;

    trace!(count = open_orders.len(), "Adapted trigger open orders");
    Ok(OpenOrders { open_orders })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderStatus, OrderType};
    use crate::error::AdapterError;
    use crate::models::{FtxConditionalOrderType, FtxOrderSide};
    use rust_decimal_macros::dec;

    fn btc_usd() -> CurrencyPair {
        CurrencyPair::new("BTC", "USD")
    }

    fn plain_order(json_flags: &str) -> FtxOrderDto {
        serde_json::from_str(&format!(
            r#"{{
                "id": 9596912,
                "clientId": "my-ref",
                "market": "XRP-PERP",
                "future": "XRP-PERP",
                "type": "limit",
                "side": "sell",
                "price": 0.306525,
                "size": 31431.0,
                "filledSize": 100.0,
                "remainingSize": 31331.0,
                "avgFillPrice": 0.3066,
                "status": "open",
                "createdAt": "2019-03-05T09:56:55.728933+00:00"
                {json_flags}
            }}"#
        ))
        .unwrap()
    }

    fn conditional_order(json_extra: &str) -> FtxConditionalOrderDto {
        serde_json::from_str(&format!(
            r#"{{
                "id": 50001,
                "market": "XRP/USD",
                "future": null,
                "type": "stop",
                "orderType": "market",
                "side": "buy",
                "size": 0.003,
                "triggerPrice": 0.49,
                "orderPrice": null,
                "trailValue": null,
                "trailStart": null,
                "filledSize": 0.0,
                "avgFillPrice": null,
                "status": "open",
                "orderId": null,
                "error": null,
                "triggeredAt": null,
                "createdAt": "2019-03-05T09:56:55.728933+00:00"
                {json_extra}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn market_payload_has_no_price() {
        let order = MarketOrder::new(OrderType::Bid, dec!(0.5), btc_usd())
            .with_flag(OrderFlag::Ioc)
            .with_user_reference("ref-1");
        let payload = adapt_market_order_payload(&order);

        assert_eq!(payload.market, "BTC/USD");
        assert_eq!(payload.side, FtxOrderSide::Buy);
        assert_eq!(payload.price, None);
        assert_eq!(payload.order_type, FtxOrderType::Market);
        assert!(payload.ioc);
        assert!(!payload.post_only);
        assert!(!payload.reduce_only);
        assert_eq!(payload.client_id.as_deref(), Some("ref-1"));
    }

    #[test]
    fn limit_payload_carries_price_and_flags() {
        let order = LimitOrder::new(
            OrderType::ExitBid,
            dec!(2),
            CurrencyPair::new("BTC", "PERP"),
            dec!(45000.5),
        )
        .with_flag(OrderFlag::ReduceOnly)
        .with_flag(OrderFlag::PostOnly);
        let payload = adapt_limit_order_payload(&order);

        assert_eq!(payload.market, "BTC-PERP");
        assert_eq!(payload.side, FtxOrderSide::Sell);
        assert_eq!(payload.price, Some(dec!(45000.5)));
        assert_eq!(payload.order_type, FtxOrderType::Limit);
        assert!(payload.reduce_only);
        assert!(payload.post_only);
        assert!(!payload.ioc);
        assert_eq!(payload.client_id, None);
    }

    #[test]
    fn limit_payload_serializes_to_venue_json() {
        let order = LimitOrder::new(OrderType::Bid, dec!(0.25), btc_usd(), dec!(40000));
        let json = serde_json::to_value(adapt_limit_order_payload(&order)).unwrap();

        assert_eq!(json["market"], "BTC/USD");
        assert_eq!(json["side"], "buy");
        assert_eq!(json["type"], "limit");
        assert_eq!(json["price"], 40000.0);
        assert_eq!(json["size"], 0.25);
        assert_eq!(json["reduceOnly"], false);
        assert!(json["clientId"].is_null());
    }

    #[test]
    fn modify_payload() {
        let order = LimitOrder::new(OrderType::Ask, dec!(3), btc_usd(), dec!(41000))
            .with_user_reference("amend-7");
        let payload = adapt_modify_order_payload(&order);

        assert_eq!(payload.price, Some(dec!(41000)));
        assert_eq!(payload.size, dec!(3));
        assert_eq!(payload.client_id.as_deref(), Some("amend-7"));
    }

    #[test]
    fn stop_payload_defaults_to_stop_loss() {
        let order = StopOrder::new(OrderType::ExitAsk, dec!(1), btc_usd(), dec!(38000))
            .with_flag(OrderFlag::RetryUntilFilled)
            .with_flag(OrderFlag::ReduceOnly);
        let payload = adapt_stop_order_payload(&order).unwrap();

        assert_eq!(payload.order_type, FtxConditionalOrderType::Stop);
        assert_eq!(payload.side, FtxOrderSide::Buy);
        assert_eq!(payload.trigger_price, dec!(38000));
        assert_eq!(payload.order_price, None);
        assert_eq!(payload.trail_value, None);
        assert!(payload.reduce_only);
        assert!(payload.retry_until_filled);
    }

    #[test]
    fn take_profit_payload_with_limit() {
        let order = StopOrder::new(OrderType::Ask, dec!(1), btc_usd(), dec!(52000))
            .with_intention(Intention::TakeProfit)
            .with_limit_price(dec!(51900));
        let payload = adapt_stop_order_payload(&order).unwrap();

        assert_eq!(payload.order_type, FtxConditionalOrderType::TakeProfit);
        assert_eq!(payload.order_price, Some(dec!(51900)));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "take_profit");
        assert_eq!(json["triggerPrice"], 52000.0);
        assert!(json["trailValue"].is_null());
    }

    #[test]
    fn trailing_stop_payload_is_rejected() {
        let order = StopOrder::new(OrderType::Ask, dec!(1), btc_usd(), dec!(52000))
            .with_intention(Intention::TrailingStop);
        assert!(matches!(
            adapt_stop_order_payload(&order),
            Err(AdapterError::UnsupportedIntention(Intention::TrailingStop))
        ));
    }

    #[test]
    fn modify_conditional_payload() {
        let order = StopOrder::new(OrderType::Bid, dec!(0.1), btc_usd(), dec!(50000))
            .with_limit_price(dec!(50100));
        let payload = adapt_modify_conditional_order_payload(&order);

        assert_eq!(payload.order_price, Some(dec!(50100)));
        assert_eq!(payload.trigger_price, dec!(50000));
        assert_eq!(payload.trail_value, None);
        assert_eq!(payload.size, dec!(0.1));
    }

    #[test]
    fn inbound_limit_order() {
        let order = adapt_limit_order(&plain_order(r#", "ioc": true, "postOnly": false"#)).unwrap();

        assert_eq!(order.order_type, OrderType::Ask);
        assert_eq!(order.instrument, CurrencyPair::new("XRP", "PERP"));
        assert_eq!(order.original_amount, dec!(31431));
        assert_eq!(order.limit_price, Some(dec!(0.306525)));
        assert_eq!(order.cumulative_amount, Some(dec!(100)));
        assert_eq!(order.remaining_amount, Some(dec!(31331)));
        assert_eq!(order.average_price, Some(dec!(0.3066)));
        assert_eq!(order.status, Some(OrderStatus::Open));
        assert_eq!(order.user_reference.as_deref(), Some("my-ref"));
        assert_eq!(order.id, "9596912");
        assert!(order.timestamp.is_some());
        assert_eq!(order.flags, BTreeSet::from([OrderFlag::Ioc]));
    }

    #[test]
    fn inbound_limit_order_without_flags_has_empty_set() {
        let order = adapt_limit_order(&plain_order("")).unwrap();
        assert!(order.flags.is_empty());
    }

    #[test]
    fn inbound_conditional_order_uses_trigger_price() {
        let order = adapt_conditional_limit_order(&conditional_order(
            r#", "reduceOnly": true, "retryUntilFilled": true"#,
        ))
        .unwrap();

        assert_eq!(order.order_type, OrderType::Bid);
        assert_eq!(order.instrument, CurrencyPair::new("XRP", "USD"));
        assert_eq!(order.limit_price, Some(dec!(0.49)));
        assert_eq!(order.remaining_amount, None);
        assert_eq!(order.cumulative_amount, Some(dec!(0)));
        assert_eq!(order.id, "50001");
        assert_eq!(
            order.flags,
            BTreeSet::from([OrderFlag::RetryUntilFilled, OrderFlag::ReduceOnly])
        );
        assert!(!order.has_flag(OrderFlag::Ioc));
    }

    #[test]
    fn open_order_lists() {
        let plain = vec![plain_order(""), plain_order(r#", "reduceOnly": true"#)];
        assert_eq!(adapt_open_orders(&plain).unwrap().open_orders.len(), 2);

        let conditional = vec![conditional_order("")];
        let open = adapt_trigger_open_orders(&conditional).unwrap();
        assert_eq!(open.open_orders.len(), 1);
        assert!(adapt_open_orders(&[]).unwrap().open_orders.is_empty());
    }

    #[test]
    fn conditional_types_use_snake_case() {
        let cases = [
            (FtxConditionalOrderType::Stop, "stop"),
            (FtxConditionalOrderType::TrailingStop, "trailing_stop"),
            (FtxConditionalOrderType::TakeProfit, "take_profit"),
        ];
        for (kind, wire) in cases {
            assert_eq!(serde_json::to_value(kind).unwrap(), wire);
            let decoded: FtxConditionalOrderType =
                serde_json::from_str(&format!("\"{wire}\"")).unwrap();
            assert_eq!(decoded, kind);
        }
    }

    #[test]
    fn trailing_stop_in_trigger_list_is_adapted() {
        let json = r#"{
            "id": 50003,
            "market": "BTC-PERP",
            "future": "BTC-PERP",
            "type": "trailing_stop",
            "orderType": "market",
            "side": "sell",
            "size": 0.5,
            "triggerPrice": null,
            "orderPrice": null,
            "trailValue": -50.0,
            "trailStart": 61000.0,
            "filledSize": 0.0,
            "avgFillPrice": null,
            "status": "open",
            "orderId": null,
            "error": null,
            "triggeredAt": null,
            "createdAt": "2021-11-01T02:00:00+00:00"
        }"#;
        let order: FtxConditionalOrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_type, FtxConditionalOrderType::TrailingStop);

        let open = adapt_trigger_open_orders(&[order]).unwrap();
        assert_eq!(open.open_orders[0].limit_price, None);
        assert_eq!(open.open_orders[0].instrument, CurrencyPair::new("BTC", "PERP"));
    }
}

//! Open position adaptation.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::domain::{CurrencyPair, OpenPosition, OpenPositions, PositionType};
use crate::error::Result;
use crate::models::{FtxOrderSide, FtxPositionDto};

/// Converts venue positions, keeping only those with a strictly positive size.
///
/// The venue keeps closed positions in its list with a zero size; those are
/// not open positions and are dropped.
///
/// # Errors
///
/// Returns [`AdapterError::MalformedMarket`](crate::AdapterError::MalformedMarket)
/// if a position's future name cannot be parsed.
pub fn adapt_open_positions(positions: &[FtxPositionDto]) -> Result<OpenPositions> {
    let mut open_positions = Vec::with_capacity(positions.len());

    for position in positions {
        if position.size <= Decimal::ZERO {
            debug!(future = %position.future, size = %position.size, "Skipping empty position");
            continue;
        }

        open_positions.push(OpenPosition {
            instrument: position.future.parse::<CurrencyPair>()?,
            position_type: position_type(position.side),
            size: position.size,
            price: position.recent_break_even_price,
            liquidation_price: position.estimated_liquidation_price,
            unrealised_pnl: position.recent_pnl,
        });
    }

    trace!(count = open_positions.len(), "Adapted open positions");
    Ok(OpenPositions { open_positions })
}

fn position_type(side: FtxOrderSide) -> PositionType {
    match side {
        FtxOrderSide::Buy => PositionType::Long,
        FtxOrderSide::Sell => PositionType::Short,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(future: &str, side: FtxOrderSide, size: Decimal) -> FtxPositionDto {
        FtxPositionDto {
            future: future.to_string(),
            side,
            size,
            net_size: if side == FtxOrderSide::Sell { -size } else { size },
            cost: dec!(0),
            entry_price: Some(dec!(40000)),
            estimated_liquidation_price: Some(dec!(35000)),
            initial_margin_requirement: dec!(0.1),
            maintenance_margin_requirement: dec!(0.03),
            long_order_size: dec!(0),
            short_order_size: dec!(0),
            open_size: size,
            realized_pnl: dec!(0),
            unrealized_pnl: dec!(0),
            collateral_used: dec!(0),
            recent_break_even_price: Some(dec!(40100)),
            recent_average_open_price: Some(dec!(40050)),
            recent_pnl: Some(dec!(-12.5)),
        }
    }

    #[test]
    fn only_positive_positions_survive() {
        let positions = vec![
            position("BTC-PERP", FtxOrderSide::Buy, dec!(0)),
            position("ETH-PERP", FtxOrderSide::Sell, dec!(-1)),
            position("SOL-0625", FtxOrderSide::Buy, dec!(2.5)),
        ];
        let adapted = adapt_open_positions(&positions).unwrap();

        assert_eq!(adapted.open_positions.len(), 1);
        let open = &adapted.open_positions[0];
        assert_eq!(open.size, dec!(2.5));
        assert_eq!(open.instrument, CurrencyPair::new("SOL", "0625"));
        assert_eq!(open.position_type, PositionType::Long);
        assert_eq!(open.price, Some(dec!(40100)));
        assert_eq!(open.liquidation_price, Some(dec!(35000)));
        assert_eq!(open.unrealised_pnl, Some(dec!(-12.5)));
    }

    #[test]
    fn sell_side_is_short() {
        let adapted =
            adapt_open_positions(&[position("BTC-PERP", FtxOrderSide::Sell, dec!(0.3))]).unwrap();
        assert_eq!(adapted.open_positions[0].position_type, PositionType::Short);
    }

    #[test]
    fn empty_list() {
        assert!(adapt_open_positions(&[]).unwrap().open_positions.is_empty());
    }

    #[test]
    fn malformed_future_name_is_an_error() {
        let result = adapt_open_positions(&[position("BTCPERP", FtxOrderSide::Buy, dec!(1))]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_size_malformed_name_is_skipped_before_parsing() {
        let result = adapt_open_positions(&[position("BTCPERP", FtxOrderSide::Buy, dec!(0))]);
        assert!(result.unwrap().open_positions.is_empty());
    }
}

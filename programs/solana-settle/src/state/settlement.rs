use anchor_lang::prelude::*;
use crate::errors::SettleError;
use crate::state::{
    CollateralRecord, EventLedger, EventStatus, FeeSplit, PoolDisposition, RiskParams, TrustRecord,
};
use crate::utils::{split_three, ThreeWaySplit};

/// Everything an adjudicator's ruling moves. Amounts not touched by the
/// ruling's branch stay zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DisputeSettlement {
    pub outcome_changed: bool,
    pub disposition: PoolDisposition,
    /// Overturned only: contributors / protocol / burn of the collateral
    pub forfeiture: ThreeWaySplit,
    /// Overturned only: the whole fee, routed to the protocol
    pub fees: FeeSplit,
    /// Upheld with the target met: creator / protocol / burn of the pool
    pub pool: ThreeWaySplit,
    pub trust_score: i64,
}

/// Applies a ruling to the event, its collateral and the creator's trust.
pub fn settle_dispute(
    event: &mut EventLedger,
    collateral: &mut CollateralRecord,
    trust: &mut TrustRecord,
    final_outcome: u8,
    params: &RiskParams,
    now: i64,
) -> Result<DisputeSettlement> {
    let outcome_changed = event.resolve_dispute(final_outcome, now)?;
    let mut settlement = DisputeSettlement {
        outcome_changed,
        disposition: event.dispute.disposition,
        trust_score: trust.score,
        ..Default::default()
    };

    match settlement.disposition {
        PoolDisposition::ReturnedWithForfeiture => {
            settlement.forfeiture = collateral.forfeit(params, now)?;
            settlement.trust_score = trust.penalize(params)?;
            settlement.fees = event.settle_fees(false, params)?;
        }
        PoolDisposition::SurrenderedToCreator => {
            settlement.pool = split_three(
                event.dispute.total,
                params.pool_creator_bps,
                params.pool_protocol_bps,
            )?;
        }
        // Contributors reclaim individually; collateral waits for claim_collateral
        _ => {}
    }
    Ok(settlement)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CollateralSettlement {
    pub fees: FeeSplit,
    pub released: u64,
    pub trust_score: i64,
}

/// Clean release of a creator's collateral on a settled or cancelled event.
/// Settles the fee on the way out and rewards the creator.
pub fn settle_collateral(
    event: &mut EventLedger,
    collateral: &mut CollateralRecord,
    trust: &mut TrustRecord,
    params: &RiskParams,
    now: i64,
) -> Result<CollateralSettlement> {
    require!(event.status != EventStatus::Open, SettleError::EventNotResolved);
    event.ensure_settlement_open(now)?;
    require!(collateral.locked, SettleError::CollateralNotLocked);

    let fees = if event.is_settled_status() {
        event.settle_fees(true, params)?
    } else {
        FeeSplit::default()
    };
    let released = collateral.release(now)?;
    let trust_score = trust.reward(params)?;
    Ok(CollateralSettlement { fees, released, trust_score })
}

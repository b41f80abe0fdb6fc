use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::RiskParams;

declare_id!("53QTJNhJPiBpCno7ctfv43KanZsxhCi6V1DfWpxKeGo");

#[program]
pub mod solana_settle {
    use super::*;

    pub fn init_protocol(ctx: Context<InitProtocol>, params: RiskParams, adjudicators: Vec<Pubkey>) -> Result<()> {
        instructions::admin::init_protocol::process_init_protocol(ctx, params, adjudicators)
    }

    pub fn create_event(ctx: Context<CreateEvent>, event_id: u64, params: CreateEventParams) -> Result<()> {
        instructions::lifecycle::create_event::process_create_event(ctx, event_id, params)
    }

    pub fn top_up_collateral(ctx: Context<TopUpCollateral>, amount: u64) -> Result<()> {
        instructions::lifecycle::top_up_collateral::process_top_up_collateral(ctx, amount)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, outcome: u8, amount: u64) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, outcome, amount)
    }

    pub fn submit_outcome(ctx: Context<SubmitOutcome>, outcome: u8) -> Result<()> {
        instructions::lifecycle::submit_outcome::process_submit_outcome(ctx, outcome)
    }

    pub fn contribute_to_dispute(ctx: Context<ContributeToDispute>, amount: u64, reason: String) -> Result<()> {
        instructions::dispute::contribute_to_dispute::process_contribute_to_dispute(ctx, amount, reason)
    }

    pub fn resolve_dispute_externally(ctx: Context<ResolveDisputeExternally>, final_outcome: u8) -> Result<()> {
        instructions::dispute::resolve_dispute::process_resolve_dispute(ctx, final_outcome)
    }

    pub fn claim_forfeited_share(ctx: Context<ClaimForfeitedShare>) -> Result<()> {
        instructions::dispute::claim_forfeited_share::process_claim_forfeited_share(ctx)
    }

    pub fn claim_dispute_refund(ctx: Context<ClaimDisputeRefund>) -> Result<()> {
        instructions::dispute::claim_dispute_refund::process_claim_dispute_refund(ctx)
    }

    pub fn claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
        instructions::betting::claim_payout::process_claim_payout(ctx)
    }

    pub fn withdraw_bet(ctx: Context<WithdrawBet>, outcome: u8) -> Result<()> {
        instructions::betting::withdraw_bet::process_withdraw_bet(ctx, outcome)
    }

    pub fn claim_collateral(ctx: Context<ClaimCollateral>) -> Result<()> {
        instructions::collateral::claim_collateral::process_claim_collateral(ctx)
    }

    pub fn cancel_event(ctx: Context<CancelEvent>) -> Result<()> {
        instructions::admin::cancel_event::process_cancel_event(ctx)
    }

    pub fn close_event(ctx: Context<CloseEvent>) -> Result<()> {
        instructions::admin::close_event::process_close_event(ctx)
    }

    pub fn sweep_abandoned_dispute(ctx: Context<SweepAbandonedDispute>) -> Result<()> {
        instructions::admin::sweep_abandoned_dispute::process_sweep_abandoned_dispute(ctx)
    }

    pub fn compute_bet_limit(ctx: Context<BetLimitView>, creator: Pubkey, collateral: u64) -> Result<u64> {
        instructions::views::compute_bet_limit::process_compute_bet_limit(ctx, creator, collateral)
    }

    pub fn preview_payout(ctx: Context<PreviewPayout>) -> Result<u64> {
        instructions::views::preview_payout::process_preview_payout(ctx)
    }
}

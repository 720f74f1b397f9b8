use chrono::Datelike;
use serde::de::DeserializeOwned;

use crate::rpc::error::{bad_params, ok, RpcError};
use crate::rpc::types::{AppState, Call, DetailParams, ListParams, Request, MAX_YEAR};
use crate::schedule;

pub const METHOD_SCHEDULE_LIST: &str = "getScheduleList";
pub const METHOD_SCHEDULE_DETAIL: &str = "getScheduleDetail";

fn parse_params<T: DeserializeOwned>(req: &Request) -> Result<T, RpcError> {
    serde_json::from_value(req.params.clone()).map_err(|e| bad_params(&req.method, e.to_string()))
}

fn parse_call(req: &Request) -> Option<Result<Call, RpcError>> {
    match req.method.as_str() {
        METHOD_SCHEDULE_LIST => Some(parse_params::<ListParams>(req).map(Call::ScheduleList)),
        METHOD_SCHEDULE_DETAIL => {
            // List params take precedence when both shapes fit, so a detail
            // call carrying a valid startDate is a mismatch.
            if serde_json::from_value::<ListParams>(req.params.clone()).is_ok() {
                return Some(Err(bad_params(&req.method, "params match getScheduleList")));
            }
            Some(parse_params::<DetailParams>(req).and_then(|p| {
                if p.id.is_empty() {
                    Err(bad_params(&req.method, "empty id"))
                } else {
                    Ok(Call::ScheduleDetail(p))
                }
            }))
        }
        _ => None,
    }
}

fn handle_schedule_list(state: &AppState, p: ListParams) -> Result<serde_json::Value, RpcError> {
    let start = p
        .start_date
        .to_naive()
        .ok_or_else(|| bad_params(METHOD_SCHEDULE_LIST, "invalid startDate"))?;
    let end = p
        .end_date
        .map(|d| {
            d.to_naive()
                .ok_or_else(|| bad_params(METHOD_SCHEDULE_LIST, "invalid endDate"))
        })
        .transpose()?;
    let end = match end {
        Some(end) => end,
        None => start
            .succ_opt()
            .filter(|d| d.year() <= MAX_YEAR)
            .ok_or_else(|| bad_params(METHOD_SCHEDULE_LIST, "startDate has no next day"))?,
    };

    let items = schedule::schedule_list(&mut state.rng(), start, Some(end));
    tracing::debug!(%start, count = items.len(), "schedule list generated");
    let data = serde_json::to_value(&items).map_err(|e| RpcError::Encode(e.to_string()))?;
    Ok(ok(data))
}

fn handle_schedule_detail(
    state: &AppState,
    p: DetailParams,
) -> Result<serde_json::Value, RpcError> {
    let item = schedule::schedule_detail(&mut state.rng(), state.today(), &p.id);
    let data = serde_json::to_value(&item).map_err(|e| RpcError::Encode(e.to_string()))?;
    Ok(ok(data))
}

pub fn try_handle(state: &AppState, req: &Request) -> Option<Result<serde_json::Value, RpcError>> {
    let call = parse_call(req)?;
    Some(call.and_then(|call| match call {
        Call::ScheduleList(p) => handle_schedule_list(state, p),
        Call::ScheduleDetail(p) => handle_schedule_detail(state, p),
    }))
}

use crate::clock::Clock;
use crate::models::StatsResponse;

pub fn current_stats(clock: &dyn Clock) -> StatsResponse {
    StatsResponse::ok(clock.uptime())
}

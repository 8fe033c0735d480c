use axum::Json;
use chrono::{Duration, Utc};
use rand::Rng;
use serde_json::{json, Value};

use super::{round1, timestamp};

/// Synthetic system metrics. Nothing here reflects actual process state;
/// field names and ranges are fixed by the mobile client's contract.
pub async fn metrics() -> Json<Value> {
    Json(metrics_impl(&mut rand::thread_rng()))
}

fn metrics_impl<R: Rng>(rng: &mut R) -> Value {
    json!({
        "cpu_usage": round1(rng.gen_range(15.0..75.0)),
        "memory_usage": round1(rng.gen_range(25.0..65.0)),
        "success_rate": round1(rng.gen_range(88.0..99.0)),
        "avg_response_time": rng.gen_range(120..=280),
        "total_requests": rng.gen_range(1500..=8000),
        "successful_requests": rng.gen_range(1400..=7800),
        "failed_requests": rng.gen_range(5..=50),
        "cache_metrics": {
            "cache_hits": rng.gen_range(800..=3000),
            "cache_misses": rng.gen_range(100..=600),
            "cache_size": format!("{} MB", round1(rng.gen_range(15.0..120.0))),
            "hit_rate": round1(rng.gen_range(78.0..95.0)),
        },
        "timestamp": timestamp(),
    })
}

pub async fn cache_stats() -> Json<Value> {
    Json(cache_stats_impl(&mut rand::thread_rng()))
}

fn cache_stats_impl<R: Rng>(rng: &mut R) -> Value {
    let cache_hits: u32 = rng.gen_range(1500..=8000);
    let cache_misses: u32 = rng.gen_range(200..=1200);
    let hit_rate = round1(f64::from(cache_hits) / f64::from(cache_hits + cache_misses) * 100.0);
    let last_cleared = Utc::now() - Duration::hours(rng.gen_range(2..=48));

    json!({
        "total_cached": rng.gen_range(800..=3000),
        "cache_hits": cache_hits,
        "cache_misses": cache_misses,
        "cache_size": format!("{} MB", round1(rng.gen_range(45.0..180.0))),
        "hit_rate": hit_rate,
        "last_cleared": last_cleared.to_rfc3339(),
        "max_size": "500 MB",
    })
}

pub async fn clear_cache() -> Json<Value> {
    Json(clear_cache_impl(&mut rand::thread_rng()))
}

fn clear_cache_impl<R: Rng>(rng: &mut R) -> Value {
    json!({
        "success": true,
        "message": "Cache cleared successfully",
        "items_cleared": rng.gen_range(500..=2000),
        "memory_freed": format!("{} MB", round1(rng.gen_range(50.0..200.0))),
        "timestamp": timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn metrics_fields_stay_in_contract_ranges() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let sut = metrics_impl(&mut rng);

            let cpu = sut["cpu_usage"].as_f64().expect("cpu_usage");
            assert!((15.0..=75.0).contains(&cpu));
            let rt = sut["avg_response_time"].as_i64().expect("avg_response_time");
            assert!((120..=280).contains(&rt));
            let hit_rate = sut["cache_metrics"]["hit_rate"].as_f64().expect("hit_rate");
            assert!((78.0..=95.0).contains(&hit_rate));
        }
    }

    #[test]
    fn cache_hit_rate_is_derived_from_counters() {
        let mut rng = SmallRng::seed_from_u64(12);
        let sut = cache_stats_impl(&mut rng);

        let hits = sut["cache_hits"].as_f64().expect("cache_hits");
        let misses = sut["cache_misses"].as_f64().expect("cache_misses");
        let hit_rate = sut["hit_rate"].as_f64().expect("hit_rate");
        assert_eq!(hit_rate, round1(hits / (hits + misses) * 100.0));
    }

    #[test]
    fn clear_cache_reports_success() {
        let sut = clear_cache_impl(&mut SmallRng::seed_from_u64(13));
        assert_eq!(sut["success"], true);
        let cleared = sut["items_cleared"].as_i64().expect("items_cleared");
        assert!((500..=2000).contains(&cleared));
    }
}

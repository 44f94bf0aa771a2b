use choghadiya::app_config::AppConfig;
use choghadiya::domain::{GoalRequest, Tier};
use choghadiya::extensions::date_time_ext::ToWeekday;
use choghadiya::narrative::{HttpNarrativeRewriter, NarrativeRequest, NarrativeRewriter, StaticRewriter};
use choghadiya::planner::plan_for;
use choghadiya::segments::Timetable;
use choghadiya::solar::{MemorySolarCache, SolarCalculator};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪔 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let calculator = SolarCalculator::with_cache(Arc::new(MemorySolarCache::new(config.cache().ttl())));
    let location = config.location();
    let point = location.point();

    let now = Utc::now();
    let today = point.civil_date(now);
    let from = today.pred_opt().unwrap_or(today);
    let to = today.succ_opt().unwrap_or(today);
    let timetable = Timetable::build(point, from, to, &calculator)?;
    let time_zone = timetable.time_zone();

    if let Some(day) = timetable.days().iter().find(|day| day.sunrise() <= now && now < day.next_sunrise()) {
        let weekday = day.date().to_weekday();
        info!("📅 Vedic day in {}: {} ({})", location.city(), weekday, weekday.vaar());
    }

    match timetable.current(now) {
        Some(segment) => info!(
            tier = %segment.tier(),
            "⏱️ Current Choghadiya in {}: {} until {}",
            location.city(),
            segment.name(),
            segment.local_end(&time_zone).format("%H:%M")
        ),
        None => warn!("⏱️ No current Choghadiya in {}", location.city()),
    }

    if let Some(segment) = timetable.next(now, &Tier::favourable()) {
        info!(
            tier = %segment.tier(),
            "⏭️ Next favourable Choghadiya: {} at {}",
            segment.name(),
            segment.local_start(&time_zone).format("%H:%M")
        );
    }

    let request = GoalRequest::new(config.planner().goal(), config.planner().window().clone(), now);
    let recommendations = plan_for(&request, point, &calculator)?;
    let Some(best) = recommendations.first() else {
        warn!("🎯 No recommendation available for {} {}", request.goal, request.window);
        return Ok(());
    };

    let rewriter: Box<dyn NarrativeRewriter> = match config.narrative() {
        Some(narrative) => Box::new(HttpNarrativeRewriter::new(narrative.rewriter_config())?),
        None => Box::new(StaticRewriter),
    };

    let narrative = NarrativeRequest::from_recommendation(location.city(), &request, best);
    let sentence = match rewriter.rewrite(&narrative).await {
        Ok(sentence) => sentence,
        Err(e) => {
            warn!("⚠️ Could not rewrite the justification: {}", e);
            best.justification.to_string()
        }
    };

    info!("🎯 {}", best.justification);
    info!("🎯 {}", sentence);
    for alternate in recommendations.iter().skip(1).take(3) {
        info!(rank = alternate.rank, "🔁 Alternative: {}", alternate.justification);
    }
    debug!("🎯 {} candidates in total", recommendations.len());

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}

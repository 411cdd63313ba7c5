//! Periodic removal of inactive participants.
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - spawn_sweeper() が一定間隔で退室処理を実行すること
//! - 停止通知でループが終了すること
//!
//! ### どのような状況を想定しているか
//! - 正常系：タイムアウトした参加者が次の実行で削除される
//! - 異常系：ストア障害が続いてもループは止まらない

use std::time::Duration;

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::usecase::EvictInactiveParticipantsUseCase;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Run `usecase` every `period` until `shutdown` flips to `true` or its sender is dropped.
///
/// The first sweep happens one full period after start. Each sweep runs in its
/// own task so that a panicking sweep is logged and the loop keeps going.
pub fn spawn_sweeper(
    usecase: EvictInactiveParticipantsUseCase,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period.max(MIN_PERIOD));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // 初回の tick は即時に完了する
        ticker.tick().await;

        tracing::info!(
            period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
            "sweeper started"
        );
        loop {
            tokio::select! {
                _ = ticker.tick() => sweep_once(&usecase).await,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::info!("sweeper stopped");
    })
}

async fn sweep_once(usecase: &EvictInactiveParticipantsUseCase) {
    let usecase = usecase.clone();
    match tokio::spawn(async move { usecase.execute().await }).await {
        Ok(Ok(evicted)) if evicted.is_empty() => {
            tracing::trace!("sweep found no inactive participants");
        }
        Ok(Ok(evicted)) => {
            tracing::info!(count = evicted.len(), "sweep removed inactive participants");
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "sweep failed");
        }
        Err(e) => {
            tracing::error!(error = %e, "sweep task aborted");
        }
    }
}

//! デバウンス（入力が落ち着いてから評価）
//!
//! タイマーは `Timer` トレイトとして抽象化し、予約ごとにキャンセルハンドルを返す。
//! `Debouncer` は新しい入力のたびに前回の予約をキャンセルして予約し直す。

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

/// 予約済みタスクのキャンセル
pub trait CancelHandle {
    /// 未実行ならタスクを取り消す（実行済みなら何もしない）
    fn cancel(&self);
}

/// 遅延実行タイマー
pub trait Timer {
    type Handle: CancelHandle;

    /// `delay` 経過後に `task` を実行するよう予約する
    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;
}

/// 最後の呼び出しから `delay` 経過したときだけタスクを実行する
pub struct Debouncer<T: Timer> {
    timer: T,
    delay: Duration,
    pending: Option<T::Handle>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 前回の予約を取り消し、`task` を予約し直す
    pub fn call<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "debounce rescheduled");
        self.pending = Some(self.timer.schedule(self.delay, task));
    }

    /// 予約中のタスクを取り消す
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

type Task = Box<dyn FnOnce() + Send>;

struct Scheduled {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    tasks: Vec<Scheduled>,
}

/// 手動で時間を進めるタイマー
///
/// `advance` を呼ぶまで何も実行されない。テストや、イベントループを
/// 自前で回す組み込み用途向け。
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Arc<Mutex<ManualClock>>,
}

fn lock(clock: &Mutex<ManualClock>) -> MutexGuard<'_, ManualClock> {
    clock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の仮想時刻（生成からの経過時間）
    pub fn now(&self) -> Duration {
        lock(&self.clock).now
    }

    /// 未実行の予約数
    pub fn pending(&self) -> usize {
        lock(&self.clock).tasks.len()
    }

    /// 時間を進め、期限の来たタスクを期限順に実行する
    ///
    /// # Returns
    /// 実行したタスク数
    pub fn advance(&self, by: Duration) -> usize {
        let target = lock(&self.clock).now + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = lock(&self.clock);
                let due = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let scheduled = clock.tasks.remove(i);
                        clock.now = scheduled.due;
                        Some(scheduled.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };

            // ロック外で実行（タスク内からの再予約を許す）
            match next {
                Some(task) => {
                    task();
                    fired += 1;
                }
                None => break,
            }
        }

        fired
    }
}

/// `ManualTimer` の予約ハンドル
pub struct ManualHandle {
    id: u64,
    clock: Weak<Mutex<ManualClock>>,
}

impl CancelHandle for ManualHandle {
    fn cancel(&self) {
        if let Some(clock) = self.clock.upgrade() {
            lock(&clock).tasks.retain(|t| t.id != self.id);
        }
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> ManualHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut clock = lock(&self.clock);
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push(Scheduled {
            id,
            due,
            task: Box::new(task),
        });

        ManualHandle {
            id,
            clock: Arc::downgrade(&self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(400);

    #[test]
    fn test_fires_after_quiescence() {
        let timer = ManualTimer::new();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        let (tx, rx) = mpsc::channel();

        debouncer.call(move || tx.send("fired").unwrap());
        assert_eq!(timer.advance(Duration::from_millis(399)), 0);
        assert!(rx.try_recv().is_err());

        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(rx.try_recv().unwrap(), "fired");
    }

    #[test]
    fn test_only_last_call_in_window_fires() {
        let timer = ManualTimer::new();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        let (tx, rx) = mpsc::channel();

        for text in ["1", "12", "123"] {
            let tx = tx.clone();
            debouncer.call(move || tx.send(text).unwrap());
            timer.advance(Duration::from_millis(100));
        }
        assert_eq!(timer.pending(), 1);

        timer.advance(DELAY);
        let received: Vec<&str> = rx.try_iter().collect();
        assert_eq!(received, vec!["123"]);
    }

    #[test]
    fn test_cancel_drops_pending_task() {
        let timer = ManualTimer::new();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        let (tx, rx) = mpsc::channel::<()>();

        debouncer.call(move || tx.send(()).unwrap());
        debouncer.cancel();
        assert_eq!(timer.advance(DELAY * 2), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_separate_windows_fire_separately() {
        let timer = ManualTimer::new();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        let (tx, rx) = mpsc::channel();

        let first = tx.clone();
        debouncer.call(move || first.send(1).unwrap());
        timer.advance(DELAY);
        debouncer.call(move || tx.send(2).unwrap());
        timer.advance(DELAY);

        let received: Vec<i32> = rx.try_iter().collect();
        assert_eq!(received, vec![1, 2]);
    }

    #[test]
    fn test_manual_timer_runs_tasks_in_due_order() {
        let timer = ManualTimer::new();
        let (tx, rx) = mpsc::channel();

        let late = tx.clone();
        let _a = timer.schedule(Duration::from_millis(300), move || late.send("late").unwrap());
        let _b = timer.schedule(Duration::from_millis(100), move || tx.send("early").unwrap());

        assert_eq!(timer.advance(Duration::from_secs(1)), 2);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["early", "late"]);
        assert_eq!(timer.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let timer = ManualTimer::new();
        let handle = timer.schedule(Duration::ZERO, || {});
        assert_eq!(timer.advance(Duration::ZERO), 1);
        handle.cancel();
        assert_eq!(timer.pending(), 0);
    }
}

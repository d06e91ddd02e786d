use crate::{CancelToken, UiDispatcher};

/// Runs `work` on a worker thread and posts its result to the UI queue.
///
/// `work` receives the cooperative [`CancelToken`] and must produce a `Send`
/// value. Nothing is spawned when the token is already cancelled, and a
/// result produced after cancellation is dropped instead of posted.
pub fn spawn_background<M, Work>(dispatcher: &UiDispatcher<M>, token: CancelToken, work: Work)
where
    M: Send + 'static,
    Work: FnOnce(&CancelToken) -> M + Send + 'static,
{
    if token.is_cancelled() {
        return;
    }
    let dispatcher = dispatcher.clone();
    std::thread::spawn(move || {
        let value = work(&token);
        if token.is_cancelled() {
            log::trace!("background result dropped after cancellation");
            return;
        }
        if !dispatcher.post(value) {
            log::trace!("background result dropped: UI queue is gone");
        }
    });
}

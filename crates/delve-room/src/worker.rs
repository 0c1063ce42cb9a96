//! Background path searches.
//!
//! A [`PathWorker`] owns one thread that answers path requests in
//! submission order. Each submission hands back a [`Ticket`] whose context
//! cancels that request, whether it is still queued or already searching.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use delve_core::Context;
use delve_paths::{PathError, SearchOutcome};
use glam::Vec2;
use thiserror::Error;

use crate::room::Room;

/// A route request between two world positions in one room.
#[derive(Debug, Clone)]
pub struct PathRequest {
    pub room: Arc<Room>,
    pub from: Vec2,
    pub to: Vec2,
}

/// Answer to a [`PathRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathResponse {
    /// Id of the [`Ticket`] the request was submitted under.
    pub id: u64,
    pub result: Result<SearchOutcome, PathError>,
}

/// Handle to a submitted request.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: u64,
    ctx: Context,
}

impl Ticket {
    /// Ask the worker to stop this request. Its response reports
    /// [`SearchOutcome::Cancelled`] unless the search already finished.
    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("path worker thread has stopped")]
    Disconnected,
}

struct Job {
    id: u64,
    request: PathRequest,
    ctx: Context,
}

/// A background thread serving [`PathRequest`]s.
///
/// Dropping the worker closes its queue and joins the thread after the
/// queued requests are answered or cancelled.
pub struct PathWorker {
    jobs: Option<Sender<Job>>,
    responses: Receiver<PathResponse>,
    handle: Option<JoinHandle<()>>,
    next_id: u64,
}

impl PathWorker {
    /// Start the worker thread.
    pub fn spawn() -> std::io::Result<Self> {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("path-worker".into())
            .spawn(move || serve(job_rx, resp_tx))?;
        Ok(Self {
            jobs: Some(job_tx),
            responses: resp_rx,
            handle: Some(handle),
            next_id: 0,
        })
    }

    /// Queue a request.
    pub fn submit(&mut self, request: PathRequest) -> Result<Ticket, WorkerError> {
        let id = self.next_id;
        self.next_id += 1;
        let ctx = Context::new();
        let job = Job {
            id,
            request,
            ctx: ctx.clone(),
        };
        self.jobs
            .as_ref()
            .ok_or(WorkerError::Disconnected)?
            .send(job)
            .map_err(|_| WorkerError::Disconnected)?;
        log::trace!("queued path request {id}");
        Ok(Ticket { id, ctx })
    }

    /// Next response if one is ready.
    pub fn try_recv(&self) -> Option<PathResponse> {
        self.responses.try_recv().ok()
    }

    /// Block until the next response arrives. Returns `None` once the
    /// worker has stopped and every response was delivered.
    pub fn recv(&self) -> Option<PathResponse> {
        self.responses.recv().ok()
    }

    /// Block for at most `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<PathResponse>, WorkerError> {
        match self.responses.recv_timeout(timeout) {
            Ok(resp) => Ok(Some(resp)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }
}

impl Drop for PathWorker {
    fn drop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("path worker thread panicked");
            }
        }
    }
}

fn serve(jobs: Receiver<Job>, responses: Sender<PathResponse>) {
    for Job { id, request, ctx } in jobs {
        let result = if ctx.is_done() {
            log::trace!("path request {id} cancelled while queued");
            Ok(SearchOutcome::Cancelled)
        } else {
            log::trace!("path request {id} started");
            request
                .room
                .path_to_with_context(request.from, request.to, &ctx)
        };
        if responses.send(PathResponse { id, result }).is_err() {
            log::warn!("dropping response to path request {id}: receiver gone");
            return;
        }
    }
    log::trace!("path worker queue closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::Point;

    fn open_room() -> Arc<Room> {
        Arc::new(Room::new(Point::new(0, 0), Point::new(9, 9)))
    }

    fn request(room: &Arc<Room>, to: Vec2) -> PathRequest {
        PathRequest {
            room: Arc::clone(room),
            from: Vec2::new(0.5, 0.5),
            to,
        }
    }

    #[test]
    fn answers_in_submission_order() {
        let room = open_room();
        let mut worker = PathWorker::spawn().unwrap();
        let a = worker.submit(request(&room, Vec2::new(9.5, 9.5))).unwrap();
        let b = worker.submit(request(&room, Vec2::new(3.5, 0.5))).unwrap();
        assert_ne!(a.id, b.id);

        let first = worker.recv().unwrap();
        let second = worker.recv().unwrap();
        assert_eq!(first.id, a.id);
        assert_eq!(second.id, b.id);

        let path = first.result.unwrap().into_path().unwrap();
        assert_eq!(path.destination(), Some(Vec2::new(9.5, 9.5)));
        let direct = room
            .path_to(Vec2::new(0.5, 0.5), Vec2::new(3.5, 0.5))
            .unwrap();
        assert_eq!(second.result.unwrap().into_path(), direct);
    }

    #[test]
    fn cancelled_ticket_reports_cancelled() {
        let room = open_room();
        let mut worker = PathWorker::spawn().unwrap();
        let ticket = worker.submit(request(&room, Vec2::new(9.5, 9.5))).unwrap();
        ticket.cancel();
        // The worker may have finished before the cancel landed.
        let resp = worker.recv().unwrap();
        assert_eq!(resp.id, ticket.id);
        match resp.result.unwrap() {
            SearchOutcome::Cancelled | SearchOutcome::Found(_) => {}
            SearchOutcome::NoPath => panic!("open room reported no path"),
        }
    }

    #[test]
    fn errors_are_forwarded() {
        let room = open_room();
        let mut worker = PathWorker::spawn().unwrap();
        let t = worker
            .submit(PathRequest {
                room,
                from: Vec2::new(-5.0, 0.5),
                to: Vec2::new(3.5, 3.5),
            })
            .unwrap();
        let resp = worker
            .recv_timeout(Duration::from_secs(10))
            .unwrap()
            .expect("response within timeout");
        assert_eq!(resp.id, t.id);
        assert!(matches!(resp.result, Err(PathError::StartOutOfBounds { .. })));
    }

    #[test]
    fn try_recv_is_empty_before_submission() {
        let worker = PathWorker::spawn().unwrap();
        assert!(worker.try_recv().is_none());
    }
}

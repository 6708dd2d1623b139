use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use futures::future::{self, BoxFuture};
use futures::FutureExt;
use itertools::Itertools;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Sleep;

use crate::domain::entities::{AddSchedules, Lang, LocalSchedule, ScheduleRecord, SchedulesPayload};
use crate::domain::errors::ScheduleError;
use crate::domain::offset::Clock;
use crate::domain::timezone::{TimeZoneLabel, DEFAULT_TIMEZONE};
use crate::domain::{denormalize, normalize};

use super::ports::{ApiError, Host, ScheduleApi, TagInvalidator, POSITIONS_LIST_TAG};
use super::state::{DialogError, DialogView, EditableSchedule, Phase};

/// Time the success state stays visible before the dialog hands focus back.
pub const CLOSE_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Props {
    pub candidate_id: u32,
    pub position_id: u32,
    pub lang: Lang,
}

#[derive(Clone)]
pub struct Ports {
    pub api: Arc<dyn ScheduleApi>,
    pub invalidator: Arc<dyn TagInvalidator>,
    pub host: Arc<dyn Host>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub timezone: TimeZoneLabel,
    pub close_delay: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            close_delay: CLOSE_DELAY,
        }
    }
}

#[derive(Debug)]
enum Command {
    SetSchedules(Vec<NaiveDateTime>),
    AddSlot(NaiveDateTime),
    RemoveSlot(usize),
    EditSlot(usize, NaiveDateTime),
    SetTimezone(TimeZoneLabel),
    Submit,
    Close,
    Snapshot(oneshot::Sender<DialogView>),
}

#[derive(Debug, PartialEq)]
pub struct DialogClosed;

impl std::fmt::Display for DialogClosed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "schedule dialog is closed")
    }
}

impl std::error::Error for DialogClosed {}

/// Panel-facing side of an open dialog.
pub struct DialogHandle {
    commands: mpsc::Sender<Command>,
    view: watch::Receiver<DialogView>,
}

impl DialogHandle {
    pub async fn set_schedules(&self, walls: Vec<NaiveDateTime>) -> Result<(), DialogClosed> {
        self.send(Command::SetSchedules(walls)).await
    }

    pub async fn add_slot(&self, wall: NaiveDateTime) -> Result<(), DialogClosed> {
        self.send(Command::AddSlot(wall)).await
    }

    pub async fn remove_slot(&self, index: usize) -> Result<(), DialogClosed> {
        self.send(Command::RemoveSlot(index)).await
    }

    pub async fn edit_slot(&self, index: usize, wall: NaiveDateTime) -> Result<(), DialogClosed> {
        self.send(Command::EditSlot(index, wall)).await
    }

    pub async fn set_timezone(&self, timezone: TimeZoneLabel) -> Result<(), DialogClosed> {
        self.send(Command::SetTimezone(timezone)).await
    }

    pub async fn submit(&self) -> Result<(), DialogClosed> {
        self.send(Command::Submit).await
    }

    pub async fn close(&self) -> Result<(), DialogClosed> {
        self.send(Command::Close).await
    }

    pub fn view(&self) -> DialogView {
        self.view.borrow().clone()
    }

    /// View after every command sent so far has been applied.
    pub async fn snapshot(&self) -> Result<DialogView, DialogClosed> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot(reply_tx)).await?;
        reply_rx.await.map_err(|_| DialogClosed)
    }

    pub fn subscribe(&self) -> watch::Receiver<DialogView> {
        self.view.clone()
    }

    /// Waits until a published view matches. Returns `None` if the dialog
    /// ended without ever matching.
    pub async fn wait_for(&self, predicate: impl FnMut(&DialogView) -> bool) -> Option<DialogView> {
        let mut view = self.view.clone();
        let matched = view
            .wait_for(predicate)
            .await
            .ok()
            .map(|view| DialogView::clone(&view));
        matched
    }

    async fn send(&self, command: Command) -> Result<(), DialogClosed> {
        self.commands.send(command).await.map_err(|_| DialogClosed)
    }
}

/// Opens a dialog for one candidate/position pair. The returned task owns all
/// dialog state and ends once the dialog is closed.
pub fn open(props: Props, ports: Ports, options: Options) -> (DialogHandle, JoinHandle<()>) {
    let (commands_tx, commands_rx) = mpsc::channel(16);
    let (views_tx, views_rx) = watch::channel(DialogView::loading(options.timezone));

    let dialog = Dialog {
        props,
        ports,
        close_delay: options.close_delay,
        timezone: options.timezone,
        schedules: vec![],
        loaded: false,
        phase: Phase::Loading,
        done: false,
        error: None,
        views: views_tx,
    };
    let task = tokio::spawn(dialog.run(commands_rx));

    (
        DialogHandle {
            commands: commands_tx,
            view: views_rx,
        },
        task,
    )
}

type FetchFuture = BoxFuture<'static, Result<Vec<ScheduleRecord>, ApiError>>;
type SubmitFuture = BoxFuture<'static, Result<(), ApiError>>;

struct Dialog {
    props: Props,
    ports: Ports,
    close_delay: Duration,
    timezone: TimeZoneLabel,
    schedules: Vec<EditableSchedule>,
    loaded: bool,
    phase: Phase,
    done: bool,
    error: Option<DialogError>,
    views: watch::Sender<DialogView>,
}

async fn in_flight<F: Future + Unpin>(slot: &mut Option<F>) -> F::Output {
    match slot.as_mut() {
        Some(operation) => operation.await,
        None => future::pending().await,
    }
}

impl Dialog {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        log::debug!(
            "opened schedule dialog: candidate={}, position={}",
            self.props.candidate_id,
            self.props.position_id
        );

        let mut fetch: Option<FetchFuture> = Some(self.fetch());
        let mut submit: Option<SubmitFuture> = None;
        let mut close_timer: Option<Pin<Box<Sleep>>> = None;

        // Dropping the in-flight operations on exit cancels them.
        while self.phase != Phase::Closed {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Submit) => submit = self.submit().or(submit),
                    Some(Command::Close) | None => self.close(),
                    Some(Command::Snapshot(reply)) => {
                        let _ = reply.send(self.view());
                    }
                    Some(command) => self.edit(command),
                },
                result = in_flight(&mut fetch) => {
                    fetch = None;
                    self.loaded(result);
                }
                result = in_flight(&mut submit) => {
                    submit = None;
                    if self.submitted(result) {
                        close_timer = Some(Box::pin(tokio::time::sleep(self.close_delay)));
                    }
                }
                _ = in_flight(&mut close_timer) => {
                    close_timer = None;
                    self.finish();
                }
            }
        }

        log::debug!(
            "closed schedule dialog: candidate={}, position={}",
            self.props.candidate_id,
            self.props.position_id
        );
    }

    fn fetch(&self) -> FetchFuture {
        let api = self.ports.api.clone();
        let Props {
            candidate_id,
            position_id,
            ..
        } = self.props;
        async move { api.get_schedules(candidate_id, position_id).await }.boxed()
    }

    fn loaded(&mut self, result: Result<Vec<ScheduleRecord>, ApiError>) {
        let derived = result
            .map_err(DialogError::Fetch)
            .and_then(|records| self.derive(records).map_err(DialogError::from));
        match derived {
            Ok(schedules) => {
                log::debug!("loaded {} schedules", schedules.len());
                self.schedules = schedules;
                self.loaded = true;
                self.phase = Phase::Editing;
            }
            Err(err) => {
                log::error!("failed to load schedules: {}", err);
                self.fail(err);
            }
        }
        self.publish();
    }

    /// Normalizes wire records into the current display zone, keeping each
    /// record as the source of its entry.
    fn derive(&self, sources: Vec<ScheduleRecord>) -> Result<Vec<EditableSchedule>, ScheduleError> {
        let locals = normalize::execute(&sources, self.timezone, self.ports.clock.now())?;
        Ok(sources
            .into_iter()
            .zip(locals)
            .map(|(source, local)| EditableSchedule { source, local })
            .collect())
    }

    fn entry(&self, wall: NaiveDateTime) -> EditableSchedule {
        let local = LocalSchedule::new(wall, self.timezone);
        EditableSchedule {
            source: denormalize::denormalize_schedule(&local, self.timezone),
            local,
        }
    }

    fn is_editable(&self) -> bool {
        match self.phase {
            Phase::Editing => true,
            Phase::Failed => self.loaded,
            _ => false,
        }
    }

    fn edit(&mut self, command: Command) {
        if !self.is_editable() {
            log::warn!("ignoring {:?} while dialog is {:?}", command, self.phase);
            return;
        }
        self.phase = Phase::Editing;
        self.error = None;

        match command {
            Command::SetSchedules(walls) => {
                self.schedules = walls.into_iter().unique().map(|wall| self.entry(wall)).collect();
            }
            Command::AddSlot(wall) => {
                if self.schedules.iter().any(|schedule| schedule.local.wall == wall) {
                    log::debug!("slot {} is already picked", wall);
                } else {
                    let entry = self.entry(wall);
                    self.schedules.push(entry);
                }
            }
            Command::RemoveSlot(index) => {
                if index < self.schedules.len() {
                    self.schedules.remove(index);
                } else {
                    log::warn!("no slot to remove at {}", index);
                }
            }
            Command::EditSlot(index, wall) => {
                let entry = self.entry(wall);
                match self.schedules.get_mut(index) {
                    Some(slot) => *slot = entry,
                    None => log::warn!("no slot to edit at {}", index),
                }
            }
            Command::SetTimezone(timezone) => self.change_timezone(timezone),
            Command::Submit | Command::Close | Command::Snapshot(..) => {}
        }
        self.publish();
    }

    fn change_timezone(&mut self, timezone: TimeZoneLabel) {
        log::debug!(
            "changing display timezone from {} to {}",
            self.timezone.as_str(),
            timezone.as_str()
        );
        self.timezone = timezone;
        let sources = self
            .schedules
            .iter()
            .map(|schedule| schedule.source.clone())
            .collect_vec();
        match self.derive(sources) {
            Ok(schedules) => self.schedules = schedules,
            Err(err) => {
                log::error!("failed to change display timezone: {}", err);
                self.fail(err.into());
            }
        }
    }

    fn submit(&mut self) -> Option<SubmitFuture> {
        if !self.is_editable() {
            log::warn!("ignoring submit while dialog is {:?}", self.phase);
            return None;
        }

        let locals = self
            .schedules
            .iter()
            .map(|schedule| schedule.local)
            .collect_vec();
        let request = AddSchedules {
            lang: self.props.lang,
            data: SchedulesPayload {
                position_id: self.props.position_id,
                candidate_id: self.props.candidate_id,
                schedules: denormalize::execute(&locals, self.timezone),
            },
        };
        log::trace!("submitting schedules: {:?}", request);

        self.phase = Phase::Submitting;
        self.error = None;
        self.publish();

        let api = self.ports.api.clone();
        Some(async move { api.add_schedules(request).await }.boxed())
    }

    fn submitted(&mut self, result: Result<(), ApiError>) -> bool {
        let succeeded = match result {
            Ok(()) => {
                log::debug!("schedules saved for candidate {}", self.props.candidate_id);
                self.phase = Phase::Success;
                self.done = true;
                self.ports.invalidator.invalidate_tags(&[POSITIONS_LIST_TAG]);
                true
            }
            Err(err) => {
                log::error!("failed to save schedules: {}", err);
                self.fail(DialogError::Submit(err));
                false
            }
        };
        self.publish();
        succeeded
    }

    fn fail(&mut self, err: DialogError) {
        self.phase = Phase::Failed;
        self.error = Some(err);
    }

    fn finish(&mut self) {
        self.ports.host.set_switching_id(self.props.candidate_id);
        self.ports.host.set_is_open(false);
        self.phase = Phase::Closed;
        self.schedules.clear();
        self.publish();
    }

    fn close(&mut self) {
        self.ports.host.set_is_open(false);
        self.phase = Phase::Closed;
        self.done = false;
        self.schedules.clear();
        self.publish();
    }

    fn view(&self) -> DialogView {
        DialogView {
            phase: self.phase,
            timezone: self.timezone,
            schedules: self.schedules.iter().map(|schedule| schedule.local).collect(),
            done: self.done,
            error: self.error.clone(),
        }
    }

    fn publish(&self) {
        self.views.send_replace(self.view());
    }
}

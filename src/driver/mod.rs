// SPDX-License-Identifier: MPL-2.0
//! Runs a [`Manager`] on its own tokio task.
//!
//! The task owns the manager outright. Callers talk to it through
//! [`Toaster`] (cheap to clone) and per-toast [`ToastHandle`]s, both of which
//! only enqueue commands. Commands are processed strictly in the order they
//! were sent. Between commands the task sleeps until the manager's next
//! auto-dismiss deadline, so no polling tick is needed.

mod handle;

pub use handle::ToastHandle;

use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::config::Config;
use crate::domain::toast::Intent;
use crate::error::{Error, Result};
use crate::toaster::{
    Clock, Content, Manager, Message, NotificationId, NotifyOptions, Phase, ToastView,
};

/// Reads time from tokio, so paused-time tests control the manager too.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug)]
pub(crate) enum Command {
    Notify {
        content: Content,
        options: NotifyOptions,
        reply: oneshot::Sender<(NotificationId, watch::Receiver<Phase>)>,
    },
    Close(NotificationId),
    CloseAll,
    Surface(Message),
    Views(oneshot::Sender<Vec<ToastView>>),
}

/// Front end of a running toast driver.
#[derive(Debug, Clone)]
pub struct Toaster {
    commands: mpsc::UnboundedSender<Command>,
}

impl Toaster {
    /// Spawns a driver with a fresh manager built from `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_config(config: &Config) -> (Self, JoinHandle<()>) {
        Self::spawn(Manager::with_config(config, TokioClock))
    }

    /// Spawns a driver that takes ownership of `manager`.
    ///
    /// The task ends once every `Toaster` and [`ToastHandle`] is dropped.
    pub fn spawn(manager: Manager<TokioClock>) -> (Self, JoinHandle<()>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(manager, receiver));
        (Self { commands }, task)
    }

    fn send_command(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| Error::DriverClosed)
    }

    /// Shows a toast and returns a handle to it.
    pub async fn notify(&self, content: Content, options: NotifyOptions) -> Result<ToastHandle> {
        let (reply, response) = oneshot::channel();
        self.send_command(Command::Notify {
            content,
            options,
            reply,
        })?;
        let (id, phase) = response.await.map_err(|_| Error::DriverClosed)?;
        Ok(ToastHandle::new(id, phase, self.commands.clone()))
    }

    /// Shows a toast with [`Intent::Success`].
    pub async fn success(
        &self,
        title: impl Into<String>,
        options: NotifyOptions,
    ) -> Result<ToastHandle> {
        self.notify(Content::new(title).with_intent(Intent::Success), options)
            .await
    }

    /// Shows a toast with [`Intent::Warning`].
    pub async fn warning(
        &self,
        title: impl Into<String>,
        options: NotifyOptions,
    ) -> Result<ToastHandle> {
        self.notify(Content::new(title).with_intent(Intent::Warning), options)
            .await
    }

    /// Shows a toast with [`Intent::Danger`].
    pub async fn danger(
        &self,
        title: impl Into<String>,
        options: NotifyOptions,
    ) -> Result<ToastHandle> {
        self.notify(Content::new(title).with_intent(Intent::Danger), options)
            .await
    }

    /// Closes a toast by id.
    pub fn close(&self, id: NotificationId) -> Result<()> {
        self.send_command(Command::Close(id))
    }

    /// Closes every visible toast.
    pub fn close_all(&self) -> Result<()> {
        self.send_command(Command::CloseAll)
    }

    /// Forwards a rendering-surface message (pointer, height, exit).
    pub fn send(&self, message: Message) -> Result<()> {
        self.send_command(Command::Surface(message))
    }

    /// Returns render snapshots of every live toast, after every command
    /// sent before this call has been processed.
    pub async fn views(&self) -> Result<Vec<ToastView>> {
        let (reply, response) = oneshot::channel();
        self.send_command(Command::Views(reply))?;
        response.await.map_err(|_| Error::DriverClosed)
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

async fn run(mut manager: Manager<TokioClock>, mut commands: mpsc::UnboundedReceiver<Command>) {
    let mut phases: HashMap<NotificationId, watch::Sender<Phase>> = HashMap::new();
    debug!("toast driver started");

    loop {
        let deadline = manager.next_deadline();
        tokio::select! {
            biased;
            command = commands.recv() => {
                let Some(command) = command else { break };
                apply(&mut manager, &mut phases, command);
            }
            () = sleep_until(deadline) => {
                let fired = manager.tick();
                trace!(fired, "dismiss timers fired");
            }
        }
        publish(&manager, &mut phases);
    }

    debug!(live = manager.len(), "toast driver stopped");
}

fn apply(
    manager: &mut Manager<TokioClock>,
    phases: &mut HashMap<NotificationId, watch::Sender<Phase>>,
    command: Command,
) {
    match command {
        Command::Notify {
            content,
            options,
            reply,
        } => {
            let id = manager.notify(content, options);
            let (sender, receiver) = watch::channel(Phase::Visible);
            phases.insert(id, sender);
            // A caller that stopped waiting still gets a toast.
            let _ = reply.send((id, receiver));
        }
        Command::Close(id) => {
            manager.close(id);
        }
        Command::CloseAll => {
            manager.close_all();
        }
        Command::Surface(message) => manager.update(message),
        Command::Views(reply) => {
            let _ = reply.send(manager.views());
        }
    }
}

/// Pushes phase changes to handles and forgets removed toasts.
fn publish(
    manager: &Manager<TokioClock>,
    phases: &mut HashMap<NotificationId, watch::Sender<Phase>>,
) {
    phases.retain(|id, sender| {
        let phase = manager.phase(*id);
        sender.send_if_modified(|published| {
            if *published == phase {
                false
            } else {
                *published = phase;
                true
            }
        });
        phase != Phase::Removed
    });
}

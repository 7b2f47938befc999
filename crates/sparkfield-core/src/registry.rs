//! Explicit registry of running animations.
//!
//! The host owns one registry and drives every controller through it: one
//! frame callback calls `tick_all`, viewport changes go to `resize_all`, and
//! a scene exit calls `stop_all`. Controllers never reach each other through
//! globals.

use fnv::FnvHashMap;

/// Capability every animation controller exposes to its host.
pub trait Animator {
    fn start(&mut self);
    fn stop(&mut self);
    fn resize(&mut self, width: f32, height: f32);
    fn tick(&mut self, _dt_sec: f32) {}
    fn pause(&mut self) {}
    fn is_running(&self) -> bool;
}

struct Entry {
    name: String,
    animator: Box<dyn Animator>,
}

#[derive(Default)]
pub struct AnimationRegistry {
    entries: Vec<Entry>,
    index: FnvHashMap<String, usize>,
    stopped: bool,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a controller under `name`, replacing any previous one (which is
    /// stopped). After `stop_all` the newcomer is stopped and dropped right
    /// away; returns whether it was kept.
    pub fn register(&mut self, name: impl Into<String>, mut animator: Box<dyn Animator>) -> bool {
        let name = name.into();
        if self.stopped {
            log::info!("[registry] '{name}' arrived after stop; discarding");
            animator.stop();
            return false;
        }
        match self.index.get(&name) {
            Some(&i) => {
                log::warn!("[registry] replacing '{name}'");
                let old = std::mem::replace(&mut self.entries[i].animator, animator);
                drop_stopped(old);
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(Entry { name, animator });
            }
        }
        true
    }

    /// Detach a controller without stopping it.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Animator>> {
        let i = self.index.remove(name)?;
        let entry = self.entries.remove(i);
        for idx in self.index.values_mut() {
            if *idx > i {
                *idx -= 1;
            }
        }
        Some(entry.animator)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Animator + 'static)> {
        let i = *self.index.get(name)?;
        Some(self.entries[i].animator.as_mut())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn running_count(&self) -> usize {
        self.entries.iter().filter(|e| e.animator.is_running()).count()
    }

    pub fn start_all(&mut self) {
        if self.stopped {
            return;
        }
        for e in &mut self.entries {
            e.animator.start();
        }
    }

    pub fn pause_all(&mut self) {
        for e in &mut self.entries {
            e.animator.pause();
        }
    }

    /// Stop every controller and refuse later registrations. Idempotent.
    pub fn stop_all(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        for e in &mut self.entries {
            e.animator.stop();
        }
        log::info!("[registry] stopped {} animations", self.entries.len());
    }

    pub fn resize_all(&mut self, width: f32, height: f32) {
        for e in &mut self.entries {
            e.animator.resize(width, height);
        }
    }

    pub fn tick_all(&mut self, dt_sec: f32) {
        if self.stopped {
            return;
        }
        for e in &mut self.entries {
            e.animator.tick(dt_sec);
        }
    }
}

fn drop_stopped(mut animator: Box<dyn Animator>) {
    animator.stop();
}

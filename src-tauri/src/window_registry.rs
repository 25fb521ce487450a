use crate::WindowHandle;

/// Live windows owned by the shell, in creation order.
#[derive(Debug, Default)]
pub(crate) struct WindowRegistry {
    windows: Vec<WindowHandle>,
}

impl WindowRegistry {
    pub(crate) fn insert(&mut self, handle: WindowHandle) {
        match self
            .windows
            .iter_mut()
            .find(|existing| existing.label == handle.label)
        {
            Some(existing) => *existing = handle,
            None => self.windows.push(handle),
        }
    }

    pub(crate) fn remove(&mut self, label: &str) -> Option<WindowHandle> {
        let index = self.windows.iter().position(|window| window.label == label)?;
        Some(self.windows.remove(index))
    }

    pub(crate) fn get(&self, label: &str) -> Option<&WindowHandle> {
        self.windows.iter().find(|window| window.label == label)
    }

    pub(crate) fn len(&self) -> usize {
        self.windows.len()
    }
}

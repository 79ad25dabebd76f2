//! Toast Notifications
//!
//! Transient success/error messages. Expiry timers live in `AppContext`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    /// Fading out; removed shortly after
    pub leaving: bool,
}

impl Toast {
    pub fn class_name(&self) -> &'static str {
        match (self.kind, self.leaving) {
            (ToastKind::Success, false) => "toast success",
            (ToastKind::Success, true) => "toast success leaving",
            (ToastKind::Error, false) => "toast error",
            (ToastKind::Error, true) => "toast error leaving",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            leaving: false,
        });
        self.next_id
    }

    pub fn begin_leave(&mut self, id: u32) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Saved");
        let b = queue.push(ToastKind::Error, "Network error");
        assert_ne!(a, b);
        assert_eq!(queue.toasts.len(), 2);

        queue.begin_leave(a);
        assert_eq!(queue.toasts[0].class_name(), "toast success leaving");
        assert_eq!(queue.toasts[1].class_name(), "toast error");

        queue.dismiss(a);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].id, b);

        // already gone
        queue.dismiss(a);
        queue.begin_leave(a);
        assert_eq!(queue.toasts.len(), 1);
    }
}

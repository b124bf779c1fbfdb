//! Notificaciones hacia el usuario
//!
//! El motor emite exactamente dos clases de avisos: éxito al terminar
//! una ruta y error al intentar seguir una ruta ya activa. La
//! implementación de producción los publica en el feed en vivo.

use chrono::Utc;
use tokio::sync::broadcast;

use super::{FeedMessage, NotificationLevel};

/// Avisos transitorios visibles para el usuario
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);

    fn notify_error(&self, message: &str);
}

/// Notificador de producción sobre el feed broadcast
#[derive(Debug, Clone)]
pub struct FeedNotifier {
    sender: broadcast::Sender<FeedMessage>,
}

impl FeedNotifier {
    pub fn new(sender: broadcast::Sender<FeedMessage>) -> Self {
        Self { sender }
    }

    fn publish(&self, level: NotificationLevel, message: &str) {
        let _ = self.sender.send(FeedMessage::Notification {
            level,
            message: message.to_string(),
            at: Utc::now(),
        });
    }
}

impl Notifier for FeedNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!("✅ Notificación: {}", message);
        self.publish(NotificationLevel::Success, message);
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!("⚠️ Notificación: {}", message);
        self.publish(NotificationLevel::Error, message);
    }
}

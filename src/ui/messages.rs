//! Localized status and error messages.
//!
//! The pipeline only reports [`MemoError`] kinds; turning them into text for a person
//! happens here, per [`Language`]. Templates use `{status}` and `{detail}`
//! placeholders.

use crate::domain::{Language, MemoError};

/// Non-error texts shown by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Sending,
    Sent,
    NotConfigured,
    NothingToSend,
}

struct Catalog {
    invalid_url: &'static str,
    unauthorized: &'static str,
    server: &'static str,
    network: &'static str,
    encoding: &'static str,
    missing_configuration: &'static str,
    sending: &'static str,
    sent: &'static str,
    not_configured: &'static str,
    nothing_to_send: &'static str,
}

const ENGLISH: Catalog = Catalog {
    invalid_url: "Invalid server URL. Please check your settings.",
    unauthorized: "Unauthorized. Please check your access token.",
    server: "Server error (status {status}).",
    network: "Network error: {detail}",
    encoding: "Failed to encode the memo.",
    missing_configuration: "Please configure the server URL and access token in settings.",
    sending: "Sending…",
    sent: "Memo sent!",
    not_configured: "Not configured. Set a server URL and access token first.",
    nothing_to_send: "Nothing to send.",
};

const GERMAN: Catalog = Catalog {
    invalid_url: "Ungültige Server-URL. Bitte überprüfe deine Einstellungen.",
    unauthorized: "Nicht autorisiert. Bitte überprüfe dein Zugriffstoken.",
    server: "Serverfehler (Status {status}).",
    network: "Netzwerkfehler: {detail}",
    encoding: "Die Notiz konnte nicht kodiert werden.",
    missing_configuration: "Bitte konfiguriere Server-URL und Zugriffstoken in den Einstellungen.",
    sending: "Wird gesendet…",
    sent: "Notiz gesendet!",
    not_configured: "Nicht konfiguriert. Lege zuerst eine Server-URL und ein Zugriffstoken fest.",
    nothing_to_send: "Nichts zu senden.",
};

const SPANISH: Catalog = Catalog {
    invalid_url: "URL del servidor no válida. Revisa la configuración.",
    unauthorized: "No autorizado. Revisa tu token de acceso.",
    server: "Error del servidor (estado {status}).",
    network: "Error de red: {detail}",
    encoding: "No se pudo codificar la nota.",
    missing_configuration: "Configura la URL del servidor y el token de acceso en los ajustes.",
    sending: "Enviando…",
    sent: "¡Nota enviada!",
    not_configured: "Sin configurar. Define primero una URL del servidor y un token de acceso.",
    nothing_to_send: "No hay nada que enviar.",
};

const FRENCH: Catalog = Catalog {
    invalid_url: "URL du serveur invalide. Vérifiez vos réglages.",
    unauthorized: "Non autorisé. Vérifiez votre jeton d'accès.",
    server: "Erreur du serveur (statut {status}).",
    network: "Erreur réseau : {detail}",
    encoding: "Impossible d'encoder le mémo.",
    missing_configuration: "Veuillez configurer l'URL du serveur et le jeton d'accès dans les réglages.",
    sending: "Envoi…",
    sent: "Mémo envoyé !",
    not_configured: "Non configuré. Définissez d'abord une URL de serveur et un jeton d'accès.",
    nothing_to_send: "Rien à envoyer.",
};

const TURKISH: Catalog = Catalog {
    invalid_url: "Geçersiz sunucu URL'si. Lütfen ayarlarınızı kontrol edin.",
    unauthorized: "Yetkisiz. Lütfen erişim belirtecinizi kontrol edin.",
    server: "Sunucu hatası (durum {status}).",
    network: "Ağ hatası: {detail}",
    encoding: "Not kodlanamadı.",
    missing_configuration: "Lütfen ayarlardan sunucu URL'sini ve erişim belirtecini yapılandırın.",
    sending: "Gönderiliyor…",
    sent: "Not gönderildi!",
    not_configured: "Yapılandırılmamış. Önce bir sunucu URL'si ve erişim belirteci ayarlayın.",
    nothing_to_send: "Gönderilecek bir şey yok.",
};

fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
        Language::Spanish => &SPANISH,
        Language::French => &FRENCH,
        Language::Turkish => &TURKISH,
    }
}

/// Human-readable text for `error` in `language`.
///
/// # Examples
///
/// ```
/// use memodrop::ui::messages::error_message;
/// use memodrop::{Language, MemoError};
///
/// assert_eq!(
///     error_message(&MemoError::Server(500), Language::English),
///     "Server error (status 500)."
/// );
/// ```
#[must_use]
pub fn error_message(error: &MemoError, language: Language) -> String {
    let catalog = catalog(language);
    match error {
        MemoError::InvalidUrl => catalog.invalid_url.to_string(),
        MemoError::Unauthorized => catalog.unauthorized.to_string(),
        MemoError::Server(status) => catalog.server.replace("{status}", &status.to_string()),
        MemoError::Network(detail) => catalog.network.replace("{detail}", detail),
        MemoError::Encoding => catalog.encoding.to_string(),
        MemoError::MissingConfiguration => catalog.missing_configuration.to_string(),
    }
}

#[must_use]
pub fn status_message(message: StatusMessage, language: Language) -> &'static str {
    let catalog = catalog(language);
    match message {
        StatusMessage::Sending => catalog.sending,
        StatusMessage::Sent => catalog.sent,
        StatusMessage::NotConfigured => catalog.not_configured,
        StatusMessage::NothingToSend => catalog.nothing_to_send,
    }
}

//! Cell detail and editing dialogs.

mod consultation_modal;
mod data_modal;
mod frame;
mod guide_modal;
mod intervention_modal;
mod navigator;
mod tpr_view;
mod value_view;

pub use consultation_modal::ConsultationModal;
pub use data_modal::DataModal;
pub use guide_modal::GuideModal;
pub use intervention_modal::InterventionModal;

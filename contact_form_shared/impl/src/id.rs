use contact_form_shared_contracts::id::IdService;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[tracing::instrument(level = "trace", skip(self))]
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }
}

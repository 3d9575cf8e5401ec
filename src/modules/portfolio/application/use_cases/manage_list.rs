use std::marker::PhantomData;

use uuid::Uuid;

use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::portfolio::application::domain::forms::EmbeddedItem;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

/// Add, replace and remove items of one embedded array of the portfolio
/// document (skills, experience, achievements, services).
pub trait ManageListUseCase<I: EmbeddedItem>: Send + Sync {
    fn add(&self, input: I::Input) -> ActionResult;

    fn update(&self, id: String, input: I::Input) -> ActionResult;

    fn remove(&self, id: String) -> ActionResult;
}

pub struct ManageListService<R, I>
where
    R: PortfolioRepository,
{
    repository: R,
    writes: WriteDispatcher,
    _item: PhantomData<fn() -> I>,
}

impl<R, I> ManageListService<R, I>
where
    R: PortfolioRepository + Clone + 'static,
    I: EmbeddedItem,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self {
            repository,
            writes,
            _item: PhantomData,
        }
    }

    /// Read-modify-write of the array in a background task. The document is
    /// created from defaults when it does not exist yet.
    ///
    /// Not atomic: two edits of the same array racing each other both load the
    /// old array, and the later merge overwrites the earlier item.
    fn rewrite<F>(&self, operation: String, edit: F)
    where
        F: FnOnce(&mut Vec<I>) -> Result<(), StoreFailure> + Send + 'static,
    {
        let repository = self.repository.clone();

        self.writes
            .dispatch(Collection::Portfolio, operation, async move {
                let document = repository
                    .load()
                    .await?
                    .unwrap_or_else(|| bundled_defaults().document.clone());

                let mut items = I::section(&document).to_vec();
                edit(&mut items)?;

                repository.merge(I::into_patch(items)).await?;
                Ok::<(), StoreFailure>(())
            });
    }
}

fn missing<I: EmbeddedItem>(id: &str) -> StoreFailure {
    StoreFailure::not_found(format!("{} {} not found", I::KIND, id))
}

impl<R, I> ManageListUseCase<I> for ManageListService<R, I>
where
    R: PortfolioRepository + Clone + 'static,
    I: EmbeddedItem,
{
    fn add(&self, input: I::Input) -> ActionResult {
        let id = Uuid::new_v4().to_string();
        let item = match I::new(id.clone(), input) {
            Ok(item) => item,
            Err(e) => return e.into(),
        };

        self.rewrite(format!("add_{}", I::KIND), move |items| {
            items.push(item);
            Ok(())
        });

        ActionResult::accepted_with_id(format!("{} added", I::LABEL), id)
    }

    fn update(&self, id: String, input: I::Input) -> ActionResult {
        let item = match I::new(id.clone(), input) {
            Ok(item) => item,
            Err(e) => return e.into(),
        };

        let target = id.clone();
        self.rewrite(format!("update_{}", I::KIND), move |items| {
            let slot = items
                .iter_mut()
                .find(|existing| existing.id() == target)
                .ok_or_else(|| missing::<I>(&target))?;
            *slot = item;
            Ok(())
        });

        ActionResult::accepted_with_id(format!("{} updated", I::LABEL), id)
    }

    fn remove(&self, id: String) -> ActionResult {
        let target = id.clone();
        self.rewrite(format!("remove_{}", I::KIND), move |items| {
            let before = items.len();
            items.retain(|existing| existing.id() != target);
            if items.len() == before {
                return Err(missing::<I>(&target));
            }
            Ok(())
        });

        ActionResult::accepted_with_id(format!("{} removed", I::LABEL), id)
    }
}

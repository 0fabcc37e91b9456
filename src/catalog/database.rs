use crate::backend::PropertyBackend;
use crate::catalog::filter::filter_properties;
use crate::catalog::form::{FieldError, FormField, FormState};
use crate::catalog::notice::Notice;
use crate::models::{Property, TypeFilter};
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no property form is open (use `add` or `edit`)")]
    NoOpenForm,
    #[error("no property with id '{0}'")]
    UnknownProperty(String),
    #[error("no property selected (pass an id)")]
    NothingSelected,
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// In-memory catalog state plus the backend it mirrors.
///
/// The property list is a cache: replaced wholesale by every successful fetch,
/// patched in place when a remote write fails.
pub struct PropertyDatabase<B> {
    backend: B,
    properties: Vec<Property>,
    search_query: String,
    selected_type: TypeFilter,
    selected: Option<Property>,
    form: Option<FormState>,
    loading: bool,
}

impl<B: PropertyBackend> PropertyDatabase<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            properties: Vec::new(),
            search_query: String::new(),
            selected_type: TypeFilter::All,
            selected: None,
            form: None,
            loading: false,
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_type(&self) -> TypeFilter {
        self.selected_type
    }

    pub fn selected(&self) -> Option<&Property> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.selected_type = filter;
    }

    /// Records visible under the current search text and type filter
    pub fn filtered(&self) -> Vec<&Property> {
        filter_properties(&self.properties, self.selected_type, &self.search_query)
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Replace the list with the backend's. On failure the current list stays.
    pub async fn load_properties(&mut self) {
        self.loading = true;
        match self.backend.list_all().await {
            Ok(properties) => {
                info!(
                    "Loaded {} properties from {}",
                    properties.len(),
                    self.backend.backend_name()
                );
                self.properties = properties;
            }
            Err(e) => {
                error!("Error loading properties: {}", e);
            }
        }
        self.loading = false;
    }

    pub fn select(&mut self, id: &str) -> Result<&Property, CatalogError> {
        let property = self
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownProperty(id.to_string()))?;
        let selected: &Property = self.selected.insert(property);
        Ok(selected)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Open a blank form. Its id depends only on the list length right now.
    pub fn open_add_form(&mut self) -> &FormState {
        self.form.insert(FormState::adding(self.properties.len()))
    }

    /// Open the form on an existing record; closes the detail view.
    pub fn open_edit_form(&mut self, id: &str) -> Result<&FormState, CatalogError> {
        let property = self
            .find(id)
            .ok_or_else(|| CatalogError::UnknownProperty(id.to_string()))?;
        let state = FormState::editing(property);
        self.selected = None;
        let form: &FormState = self.form.insert(state);
        Ok(form)
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn set_form_field(&mut self, field: FormField, value: &str) -> Result<(), CatalogError> {
        let form = self.form.as_mut().ok_or(CatalogError::NoOpenForm)?;
        form.fields.set(field, value)?;
        Ok(())
    }

    /// Submit the open form as a create or an update, then reload.
    ///
    /// When the write cannot be delivered, the record is added or replaced in
    /// the local list only. The form is closed either way.
    pub async fn save_property(&mut self) -> Result<Notice, CatalogError> {
        let form = self.form.take().ok_or(CatalogError::NoOpenForm)?;
        let property = form.fields.to_property();
        self.loading = true;

        let notice = match &form.editing_id {
            Some(editing_id) => match self.backend.update(&property).await {
                Ok(()) => {
                    self.load_properties().await;
                    Notice::success("Property updated successfully!")
                }
                Err(e) => {
                    warn!("Error saving property {}: {}", editing_id, e);
                    for existing in self.properties.iter_mut().filter(|p| &p.id == editing_id) {
                        *existing = property.clone();
                    }
                    Notice::local_only("Property updated locally (API error)")
                }
            },
            None => match self.backend.create(&property).await {
                Ok(()) => {
                    self.load_properties().await;
                    Notice::success("Property added successfully!")
                }
                Err(e) => {
                    warn!("Error saving property {}: {}", property.id, e);
                    self.properties.push(property);
                    Notice::local_only("Property added locally (API error)")
                }
            },
        };

        self.loading = false;
        Ok(notice)
    }

    /// Delete remotely, then reload. Falls back to removing the record locally.
    pub async fn delete_property(&mut self, id: &str) -> Notice {
        self.loading = true;

        let notice = match self.backend.delete(id).await {
            Ok(()) => {
                self.load_properties().await;
                Notice::success("Property deleted successfully!")
            }
            Err(e) => {
                warn!("Error deleting property {}: {}", id, e);
                self.properties.retain(|p| p.id != id);
                Notice::local_only("Property deleted locally (API error)")
            }
        };

        self.selected = None;
        self.loading = false;
        notice
    }
}

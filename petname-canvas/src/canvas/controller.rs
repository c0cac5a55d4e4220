/// Plugin controller - applies settings-panel messages to a canvas host
use crate::canvas::element::ElementId;
use crate::canvas::host::CanvasHost;
use crate::config::PluginConfig;
use crate::error::Result;
use crate::message::PluginMessage;
use crate::petname::{generate, GenerationOptions, WordCategories};

/// Notification shown after creating a text element on an empty selection
const NOTIFY_NEW_ELEMENT: &str = "Created new text node with pet name";

/// Notification for renamed elements
fn renamed_notification(count: usize) -> String {
    if count == 1 {
        "Renamed 1 node with pet names".to_string()
    } else {
        format!("Renamed {} nodes with pet names", count)
    }
}

/// Outcome of handling one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerFlow {
    /// Keep processing messages
    Continue,
    /// The panel has closed; stop processing
    Closed,
}

/// Drives a [`CanvasHost`] from incoming [`PluginMessage`]s
///
/// Owns the message channel the settings panel posts into. The generator
/// itself stays a pure function; the controller supplies it the word
/// categories and writes results back through the host.
pub struct PluginController<H> {
    /// Canvas host implementation
    host: H,

    /// Word categories shared by every generation call
    categories: WordCategories,

    /// Plugin configuration
    config: PluginConfig,

    /// Receiver for messages from the settings panel
    message_rx: flume::Receiver<PluginMessage>,

    /// Sender handed out to message producers
    message_tx: flume::Sender<PluginMessage>,
}

impl<H: CanvasHost> PluginController<H> {
    /// Create a controller over a host with the bundled word categories
    pub fn new(host: H) -> Self {
        Self::with_categories(host, WordCategories::builtin())
    }

    /// Create a controller with custom word categories
    pub fn with_categories(host: H, categories: WordCategories) -> Self {
        let (message_tx, message_rx) = flume::unbounded();
        Self {
            host,
            categories,
            config: PluginConfig::default(),
            message_rx,
            message_tx,
        }
    }

    /// Set the plugin configuration
    pub fn with_config(mut self, config: PluginConfig) -> Self {
        self.config = config;
        self
    }

    /// Get a sender for posting messages to this controller
    pub fn sender(&self) -> flume::Sender<PluginMessage> {
        self.message_tx.clone()
    }

    /// Borrow the canvas host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Apply a single message
    pub fn handle_message(&mut self, message: PluginMessage) -> Result<ControllerFlow> {
        match message {
            PluginMessage::GeneratePetnames(options) => {
                tracing::info!("generate requested: {:?}", options);
                self.apply_generation(&options)?;
                Ok(ControllerFlow::Continue)
            }
            PluginMessage::GenerateAndClose(options) => {
                tracing::info!("generate-and-close requested: {:?}", options);
                self.apply_generation(&options)?;
                self.host.close_panel();
                Ok(ControllerFlow::Closed)
            }
            PluginMessage::Close => {
                tracing::info!("close requested");
                self.host.close_panel();
                Ok(ControllerFlow::Closed)
            }
        }
    }

    /// Receive and apply the next message
    ///
    /// Returns `Closed` when the panel closes or every external sender has
    /// dropped.
    pub async fn step(&mut self) -> Result<ControllerFlow> {
        let received = self.message_rx.recv_async().await;
        match received {
            Ok(message) => self.handle_message(message),
            Err(_) => Ok(ControllerFlow::Closed),
        }
    }

    /// Process messages until the panel closes
    ///
    /// Returns the host so callers can inspect the final canvas state.
    pub async fn run(mut self) -> Result<H> {
        while self.step().await? == ControllerFlow::Continue {}
        Ok(self.host)
    }

    /// Generate one pet name per target text element and write it back
    fn apply_generation(&mut self, options: &GenerationOptions) -> Result<()> {
        let targets: Vec<ElementId> = self
            .host
            .selection()
            .into_iter()
            .filter(|id| self.host.is_text(id))
            .collect();

        // Nothing usable selected: create a fresh centered text element
        // instead of silently doing nothing.
        let created = targets.is_empty();
        let targets = if created {
            vec![self.host.create_centered_text(&self.config)?]
        } else {
            targets
        };

        for id in &targets {
            self.host.load_font(id)?;
            let name = generate(options, &self.categories);
            tracing::debug!("writing '{}' into element {}", name, id);
            self.host.set_characters(id, &name)?;
        }

        if created {
            self.host.notify(NOTIFY_NEW_ELEMENT);
        } else {
            self.host.notify(&renamed_notification(targets.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::element::FontName;
    use crate::canvas::memory::InMemoryCanvas;
    use crate::petname::{StartingLetterStyle, FALLBACK_NAME};

    fn default_font() -> FontName {
        FontName::new("Ubuntu Sans", "Regular")
    }

    fn single_outcome_options() -> GenerationOptions {
        GenerationOptions::new()
            .with_word_count(2)
            .with_starting_letter_style(StartingLetterStyle::Random)
    }

    fn single_outcome_categories() -> WordCategories {
        WordCategories::new(vec!["fox"], vec!["red"], vec!["very"])
    }

    #[test]
    fn test_generates_into_selected_text_elements() {
        let mut canvas = InMemoryCanvas::new();
        let first = canvas.add_text_element("one", default_font());
        let second = canvas.add_text_element("two", default_font());
        canvas.select(vec![first.clone(), second.clone()]);

        let mut controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        let flow = controller
            .handle_message(PluginMessage::GeneratePetnames(single_outcome_options()))
            .unwrap();

        assert_eq!(flow, ControllerFlow::Continue);
        let canvas = controller.host();
        assert_eq!(canvas.text_characters(&first), Some("red-fox"));
        assert_eq!(canvas.text_characters(&second), Some("red-fox"));
        assert_eq!(canvas.notifications(), &["Renamed 2 nodes with pet names".to_string()]);
        assert!(canvas.panel_open());
    }

    #[test]
    fn test_single_element_notification() {
        let mut canvas = InMemoryCanvas::new();
        let id = canvas.add_text_element("one", default_font());
        canvas.select(vec![id]);

        let mut controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        controller
            .handle_message(PluginMessage::GeneratePetnames(single_outcome_options()))
            .unwrap();

        assert_eq!(
            controller.host().notifications(),
            &["Renamed 1 node with pet names".to_string()]
        );
    }

    #[test]
    fn test_empty_selection_creates_text_element() {
        let canvas = InMemoryCanvas::new();
        let mut controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        controller
            .handle_message(PluginMessage::GeneratePetnames(single_outcome_options()))
            .unwrap();

        let canvas = controller.host();
        assert_eq!(canvas.elements().len(), 1);
        let id = canvas.elements()[0].id().clone();
        assert_eq!(canvas.text_characters(&id), Some("red-fox"));
        assert_eq!(canvas.notifications(), &["Created new text node with pet name".to_string()]);
    }

    #[test]
    fn test_shapes_in_selection_are_skipped() {
        let mut canvas = InMemoryCanvas::new();
        let shape = canvas.add_shape_element();
        let text = canvas.add_text_element("one", default_font());
        canvas.select(vec![shape, text.clone()]);

        let mut controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        controller
            .handle_message(PluginMessage::GeneratePetnames(single_outcome_options()))
            .unwrap();

        let canvas = controller.host();
        assert_eq!(canvas.text_characters(&text), Some("red-fox"));
        // The shape did not count towards the rename tally.
        assert_eq!(canvas.notifications(), &["Renamed 1 node with pet names".to_string()]);
        assert_eq!(canvas.elements().len(), 2);
    }

    #[test]
    fn test_shapes_only_selection_creates_text_element() {
        let mut canvas = InMemoryCanvas::new();
        let shape = canvas.add_shape_element();
        canvas.select(vec![shape]);

        let mut controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        controller
            .handle_message(PluginMessage::GeneratePetnames(single_outcome_options()))
            .unwrap();

        assert_eq!(controller.host().elements().len(), 2);
        assert_eq!(
            controller.host().notifications(),
            &["Created new text node with pet name".to_string()]
        );
    }

    #[test]
    fn test_close_message_closes_panel() {
        let canvas = InMemoryCanvas::new();
        let mut controller = PluginController::new(canvas);
        let flow = controller.handle_message(PluginMessage::Close).unwrap();
        assert_eq!(flow, ControllerFlow::Closed);
        assert!(!controller.host().panel_open());
    }

    #[test]
    fn test_generate_and_close() {
        let mut canvas = InMemoryCanvas::new();
        let id = canvas.add_text_element("one", default_font());
        canvas.select(vec![id.clone()]);

        let mut controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        let flow = controller
            .handle_message(PluginMessage::GenerateAndClose(single_outcome_options()))
            .unwrap();

        assert_eq!(flow, ControllerFlow::Closed);
        assert_eq!(controller.host().text_characters(&id), Some("red-fox"));
        assert!(!controller.host().panel_open());
    }

    #[test]
    fn test_unsatisfiable_constraints_write_fallback() {
        let mut canvas = InMemoryCanvas::new();
        let id = canvas.add_text_element("one", default_font());
        canvas.select(vec![id.clone()]);

        // No letter is shared between names and adjectives, so a two-word
        // ubuntu name degrades to the fallback sentinel.
        let categories = WordCategories::new(vec!["zebra"], vec!["bold"], vec!["boldly"]);
        let mut controller = PluginController::with_categories(canvas, categories);
        controller
            .handle_message(PluginMessage::GeneratePetnames(
                GenerationOptions::new().with_word_count(2),
            ))
            .unwrap();

        assert_eq!(controller.host().text_characters(&id), Some(FALLBACK_NAME));
    }

    #[tokio::test]
    async fn test_run_drains_messages_until_close() {
        let mut canvas = InMemoryCanvas::new();
        let id = canvas.add_text_element("one", default_font());
        canvas.select(vec![id.clone()]);

        let controller =
            PluginController::with_categories(canvas, single_outcome_categories());
        let sender = controller.sender();
        sender
            .send(PluginMessage::GeneratePetnames(single_outcome_options()))
            .unwrap();
        sender.send(PluginMessage::Close).unwrap();

        let canvas = controller.run().await.unwrap();
        assert_eq!(canvas.text_characters(&id), Some("red-fox"));
        assert!(!canvas.panel_open());
    }
}

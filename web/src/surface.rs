use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use futures_channel::mpsc::UnboundedSender;
use gloo::events::EventListener;
use gloo::utils::document;
use recall_core::{GameError, Position, Px, Rect, Result, Size, Surface, Token, TokenId};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::Callback;

use crate::game::Command;

const CLS_BOX: &str = "box";
const CLS_LABEL: &str = "label";
pub(crate) const CLS_LOCKED: &str = "is-locked";

struct TokenElement {
    button: HtmlElement,
    label: HtmlElement,
    text: String,
    _listeners: [EventListener; 2],
}

impl TokenElement {
    fn show_label(&self, visible: bool) {
        let text = if visible { self.text.as_str() } else { "" };
        self.label.set_text_content(Some(text));
    }
}

/// Draws tokens as buttons inside the board element.
///
/// Clicks are forwarded as [`Command::Click`] unless the button carries the
/// locked class.
pub(crate) struct DomSurface {
    board: HtmlElement,
    tokens: BTreeMap<TokenId, TokenElement>,
    start_control: Callback<bool>,
    commands: UnboundedSender<Command>,
    z_top: Rc<Cell<u32>>,
}

fn js_failure(context: &str, err: JsValue) -> GameError {
    log::error!("{}: {:?}", context, err);
    GameError::SurfaceFailure
}

fn to_px(value: f64) -> Px {
    value.max(0.).round() as Px
}

fn size_to_px(value: f64) -> Px {
    value.max(0.).ceil() as Px
}

impl DomSurface {
    pub(crate) fn new(
        board: HtmlElement,
        start_control: Callback<bool>,
        commands: UnboundedSender<Command>,
    ) -> Self {
        Self {
            board,
            tokens: BTreeMap::new(),
            start_control,
            commands,
            z_top: Rc::new(Cell::new(1)),
        }
    }

    fn element(&self, id: TokenId) -> Result<&TokenElement> {
        self.tokens.get(&id).ok_or(GameError::MissingToken(id))
    }

    fn create_element(&self, tag: &str) -> Result<HtmlElement> {
        document()
            .create_element(tag)
            .map(|element| element.unchecked_into::<HtmlElement>())
            .map_err(|err| js_failure("create element", err))
    }

    fn create_token(&self, token: &Token) -> Result<TokenElement> {
        let button = self.create_element("button")?;
        button.set_class_name(&format!("{} {}", CLS_BOX, token.color().class_name()));
        button
            .set_attribute("data-id", &token.id().to_string())
            .map_err(|err| js_failure("set data-id", err))?;

        let label = self.create_element("span")?;
        label.set_class_name(CLS_LABEL);
        button
            .append_child(&label)
            .map_err(|err| js_failure("append label", err))?;

        // bring the pressed token on top when tokens overlap
        let raise = {
            let z_top = Rc::clone(&self.z_top);
            let target = button.clone();
            EventListener::new(&button, "mousedown", move |_| {
                let z = z_top.get() + 1;
                z_top.set(z);
                if let Err(err) = target.style().set_property("z-index", &z.to_string()) {
                    log::error!("failed to raise token: {:?}", err);
                }
            })
        };

        let click = {
            let commands = self.commands.clone();
            let target = button.clone();
            let id = token.id();
            EventListener::new(&button, "click", move |_| {
                if target.class_list().contains(CLS_LOCKED) {
                    return;
                }
                if let Err(err) = commands.unbounded_send(Command::Click(id)) {
                    log::error!("click on {} dropped: {}", id, err);
                }
            })
        };

        let element = TokenElement {
            button,
            label,
            text: token.label().to_owned(),
            _listeners: [raise, click],
        };
        element.show_label(token.is_visible());
        if token.is_locked() {
            element
                .button
                .class_list()
                .add_1(CLS_LOCKED)
                .map_err(|err| js_failure("lock token", err))?;
        }
        Ok(element)
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
        element
            .style()
            .set_property(property, value)
            .map_err(|err| js_failure(property, err))
    }
}

impl Surface for DomSurface {
    fn render(&mut self, tokens: &[Token]) -> Result<()> {
        self.tokens.clear();
        self.board.set_inner_html("");

        // bounded arena, tokens never spill outside the board
        Self::set_style(&self.board, "position", "relative")?;
        Self::set_style(&self.board, "overflow", "hidden")?;

        for token in tokens {
            let element = self.create_token(token)?;
            self.board
                .append_child(&element.button)
                .map_err(|err| js_failure("append token", err))?;
            self.tokens.insert(token.id(), element);
        }
        log::debug!("rendered {} tokens", tokens.len());
        Ok(())
    }

    fn arena(&self) -> Size {
        Size::new(
            to_px(self.board.client_width().into()),
            to_px(self.board.client_height().into()),
        )
    }

    fn measure(&self, id: TokenId) -> Result<Rect> {
        let element = self.element(id)?;
        let board = self.board.get_bounding_client_rect();
        let rect = element.button.get_bounding_client_rect();

        Ok(Rect {
            left: to_px(rect.left() - board.left() + f64::from(self.board.scroll_left())),
            top: to_px(rect.top() - board.top() + f64::from(self.board.scroll_top())),
            width: size_to_px(rect.width()),
            height: size_to_px(rect.height()),
        })
    }

    fn set_position(&mut self, id: TokenId, position: Position) -> Result<()> {
        let element = self.element(id)?;
        Self::set_style(&element.button, "left", &format!("{}px", position.left))?;
        Self::set_style(&element.button, "top", &format!("{}px", position.top))
    }

    fn freeze_layout(&mut self) -> Result<()> {
        // measure everything first, each switch to absolute reflows the rest
        let rects = self
            .tokens
            .keys()
            .map(|&id| self.measure(id).map(|rect| (id, rect)))
            .collect::<Result<Vec<_>>>()?;

        for (id, rect) in rects {
            let button = &self.element(id)?.button;
            Self::set_style(button, "width", &format!("{}px", rect.width))?;
            Self::set_style(button, "height", &format!("{}px", rect.height))?;
            Self::set_style(button, "position", "absolute")?;
            Self::set_style(button, "left", &format!("{}px", rect.left))?;
            Self::set_style(button, "top", &format!("{}px", rect.top))?;
        }
        Ok(())
    }

    fn set_label_visible(&mut self, id: TokenId, visible: bool) {
        match self.element(id) {
            Ok(element) => element.show_label(visible),
            Err(err) => log::warn!("{}", err),
        }
    }

    fn set_locked(&mut self, id: TokenId, locked: bool) {
        let element = match self.element(id) {
            Ok(element) => element,
            Err(err) => {
                log::warn!("{}", err);
                return;
            }
        };
        if let Err(err) = element
            .button
            .class_list()
            .toggle_with_force(CLS_LOCKED, locked)
        {
            log::error!("failed to toggle lock on {}: {:?}", id, err);
        }
    }

    fn set_start_control_enabled(&mut self, enabled: bool) {
        self.start_control.emit(enabled);
    }
}

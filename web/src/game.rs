use futures_channel::mpsc;
use futures_util::StreamExt;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use recall_core::{GameConfig, GameSession, TokenId};
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::messages::{self, MessageKey};
use crate::surface::{CLS_LOCKED, DomSurface};
use crate::utils::*;

pub(crate) type WebSession = GameSession<DomSurface, AlertNotifier, GlooTimer, SmallRng>;

/// Everything that can mutate the session, processed one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Start(String),
    Click(TokenId),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(String),
    Start,
    StartControl(bool),
}

pub(crate) struct GameView {
    input: String,
    start_enabled: bool,
    board: NodeRef,
    commands: mpsc::UnboundedSender<Command>,
    pending: Option<mpsc::UnboundedReceiver<Command>>,
}

impl GameView {
    /// The session needs the mounted board, so it is only spawned after the first render.
    fn spawn_session(&mut self, ctx: &Context<Self>) {
        let Some(commands) = self.pending.take() else {
            return;
        };
        let Some(board) = self.board.cast::<HtmlElement>() else {
            log::error!("board element is not mounted");
            return;
        };

        let GameProps { config, seed } = ctx.props().clone();
        let surface = DomSurface::new(
            board,
            ctx.link().callback(Msg::StartControl),
            self.commands.clone(),
        );
        let session = GameSession::new(
            config,
            surface,
            AlertNotifier,
            GlooTimer,
            SmallRng::seed_from_u64(seed),
        );
        wasm_bindgen_futures::spawn_local(run_session(session, commands));
    }
}

async fn run_session(mut session: WebSession, mut commands: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = commands.next().await {
        match command {
            Command::Start(input) => match session.start(&input).await {
                Ok(phase) => log::debug!("board ready in {:?}", phase),
                Err(err) => log::debug!("start failed: {}", err),
            },
            Command::Click(id) => {
                let outcome = session.click(id);
                log::trace!("click {} -> {:?}", id, outcome);
            }
        }
    }
    log::debug!("command channel closed");
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let (commands, pending) = mpsc::unbounded();
        Self {
            input: String::new(),
            start_enabled: true,
            board: NodeRef::default(),
            commands,
            pending: Some(pending),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Input(value) => {
                self.input = value;
                false
            }
            Start => {
                if !self.start_enabled {
                    return false;
                }
                log::debug!("start requested: {:?}", self.input);
                if let Err(err) = self
                    .commands
                    .unbounded_send(Command::Start(self.input.clone()))
                {
                    log::error!("start dropped: {}", err);
                }
                false
            }
            StartControl(enabled) => {
                let changed = self.start_enabled != enabled;
                self.start_enabled = enabled;
                changed
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.spawn_session(ctx);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config;
        let locked = !self.start_enabled;

        let oninput = ctx.link().callback(|e: InputEvent| {
            Msg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Start);

        html! {
            <div class="recall">
                <nav>
                    <label id="promptLabel" for="userInput">{messages::text(MessageKey::Prompt)}</label>
                    <input
                        id="userInput"
                        type="number"
                        min={config.min_tokens.to_string()}
                        max={config.max_tokens.to_string()}
                        value={self.input.clone()}
                        {oninput}
                    />
                    <button
                        id="goBtn"
                        class={locked.then_some(CLS_LOCKED)}
                        disabled={locked}
                        {onclick}
                    >
                        {messages::text(MessageKey::Go)}
                    </button>
                </nav>
                <div id="board" ref={self.board.clone()}/>
            </div>
        }
    }
}

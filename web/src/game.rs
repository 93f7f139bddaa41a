use clap::Args;
use noughts_core as game;
use game::{SIDE, SquareIndex, Status, Symbol};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Free,
    Taken(Symbol),
    Winning(Symbol),
}

fn cell_state_at(state: &game::GameState, index: SquareIndex) -> ViewCellState {
    match state.squares().cell(index) {
        None => ViewCellState::Free,
        Some(symbol) if state.winning_line().is_some_and(|line| line.contains(&index)) => {
            ViewCellState::Winning(symbol)
        }
        Some(symbol) => ViewCellState::Taken(symbol),
    }
}

fn status_class(status: Status) -> &'static str {
    match status {
        Status::NextPlayer(_) => "in-progress",
        Status::Winner(_) => "win",
        Status::Scratch => "draw",
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SelectSquare(SquareIndex),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: SquareIndex,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<SquareIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        index,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let (mut class, label) = match cell_state {
        Free => (classes!("cell"), ""),
        Taken(symbol) => (classes!("cell", symbol.as_str()), symbol.as_str()),
        Winning(symbol) => (classes!("cell", symbol.as_str(), "win"), symbol.as_str()),
    };
    if locked {
        class.push("locked");
    }

    let title = format!("row {}, column {}", index.row() + 1, index.col() + 1);
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {title} {onclick}>{label}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Start from this position instead of an empty board, e.g. `XO./.X./...`
    #[arg(short, long)]
    #[prop_or_default]
    pub(crate) board: Option<game::Board>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    store: game::Store,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let state = ctx
            .props()
            .board
            .map_or_else(game::GameState::new, game::GameState::from_board);
        log::debug!("starting from:\n{}", state.squares());
        let mut store = game::Store::with_state(state);
        store.subscribe(|state| log::info!("{}", state.status()));
        Self { store }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let outcome = match msg {
            SelectSquare(index) => {
                log::debug!("select square: {}", index);
                self.store.select_square(index)
            }
            Restart => {
                log::debug!("restart");
                self.store.restart()
            }
        };
        outcome.has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.store.state();
        let status = state.status();
        let callback = ctx.link().callback(Msg::SelectSquare);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <div class="noughts">
                <nav class={status_class(status)}>{status.to_string()}</nav>
                <table class={(!state.is_finished()).then_some("playable")}>
                    {
                        for (0..SIDE).map(|row| html! {
                            <tr>
                                {
                                    for SquareIndex::ALL.into_iter().filter(|index| index.row() == row).map(|index| {
                                        let cell_state = cell_state_at(state, index);
                                        let locked = !state.can_select(index);
                                        let callback = callback.clone();
                                        html! {
                                            <CellView {index} {cell_state} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <footer>
                    <button class="restart" onclick={cb_restart}>{"Restart"}</button>
                </footer>
            </div>
        }
    }
}

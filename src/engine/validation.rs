use crate::domain::{Chips, TableState};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;

/// Все легальные действия для `current_player`.
///
/// Пространство ставок дискретное: bet и raise перебираются с шагом
/// small blind. Порядок: Fold, Check, Call, Bet по возрастанию, Raise по возрастанию.
/// Для сфолдившего или all-in места и после шоудауна – пустой список.
pub fn legal_actions(state: &TableState) -> Vec<PlayerAction> {
    let seat = state.current_player;
    if state.is_finished() || !state.can_act(seat) {
        return Vec::new();
    }

    let stack = state.stacks[seat];
    let to_call = state.to_call(seat);
    let step = state.small_blind();
    let mut actions = Vec::new();

    if !state.max_bet.is_zero() {
        actions.push(PlayerAction::Fold);
    }

    if to_call.is_zero() {
        actions.push(PlayerAction::Check);
    } else if !stack.is_zero() {
        // Колл на неполный стек тоже легален – это all-in.
        actions.push(PlayerAction::Call);
    }

    if state.max_bet.is_zero() && !stack.is_zero() {
        let mut amount = step;
        while amount <= stack {
            actions.push(PlayerAction::Bet(amount));
            amount += step;
        }
    }

    if !state.max_bet.is_zero() && stack > to_call {
        let max_raise = stack - to_call;
        let mut amount = state.min_raise;
        while amount <= max_raise {
            actions.push(PlayerAction::Raise(amount));
            amount += step;
        }
    }

    actions
}

/// Проверка действия `current_player`.
///
/// Принимает ровно то, что вернул бы `legal_actions`, иначе – конкретная
/// ошибка из категории IllegalAction.
pub fn validate_action(state: &TableState, action: &PlayerAction) -> Result<(), EngineError> {
    if state.is_finished() {
        return Err(EngineError::HandAlreadyFinished);
    }
    let seat = state.current_player;
    if !state.can_act(seat) {
        return Err(EngineError::PlayerCannotAct(seat));
    }

    let stack = state.stacks[seat];
    let to_call = state.to_call(seat);
    let step = state.small_blind();

    match *action {
        PlayerAction::Fold => {
            if state.max_bet.is_zero() {
                Err(EngineError::CannotFold)
            } else {
                Ok(())
            }
        }

        PlayerAction::Check => {
            if to_call.is_zero() {
                Ok(())
            } else {
                Err(EngineError::CannotCheck { to_call })
            }
        }

        PlayerAction::Call => {
            if to_call.is_zero() {
                Err(EngineError::CannotCall)
            } else if stack.is_zero() {
                Err(EngineError::NotEnoughChips {
                    required: to_call,
                    stack,
                })
            } else {
                Ok(())
            }
        }

        PlayerAction::Bet(amount) => {
            if !state.max_bet.is_zero() {
                return Err(EngineError::BetIntoExistingBet);
            }
            if amount > stack {
                return Err(EngineError::NotEnoughChips {
                    required: amount,
                    stack,
                });
            }
            if amount < step || amount.0 % step.0 != 0 {
                return Err(EngineError::InvalidAmount { amount, step });
            }
            Ok(())
        }

        PlayerAction::Raise(amount) => {
            if state.max_bet.is_zero() {
                return Err(EngineError::RaiseWithoutBet);
            }
            let required = to_call + amount;
            if required > stack {
                return Err(EngineError::NotEnoughChips { required, stack });
            }
            if amount < state.min_raise {
                return Err(EngineError::RaiseTooSmall {
                    amount,
                    min_raise: state.min_raise,
                });
            }
            // Сетка рейзов начинается от min_raise, а не от нуля.
            if (amount - state.min_raise).0 % step.0 != 0 {
                return Err(EngineError::InvalidAmount { amount, step });
            }
            Ok(())
        }
    }
}

/// Сколько фишек действие реально снимет со стека текущего игрока.
pub fn chips_required(state: &TableState, action: &PlayerAction) -> Chips {
    let seat = state.current_player;
    let to_call = state.to_call(seat);
    match *action {
        PlayerAction::Fold | PlayerAction::Check => Chips::ZERO,
        PlayerAction::Call => to_call.min(state.stacks[seat]),
        PlayerAction::Bet(amount) => amount,
        PlayerAction::Raise(amount) => to_call + amount,
    }
}

//! Interactive loop: read lines, dispatch commands, present outcomes.

use std::io::{self, BufRead};

use super::input::{parse, Input, HELP};
use crate::application::{CommandOutcome, DecisionCommand, DecisionController, ShareOutcome};
use crate::domain::foundation::Side;
use crate::domain::recommendation::RecommendationEngine;
use crate::ports::{DecisionPresenter, Notice};

/// Runs until `quit` or end of input.
pub fn run_session<R, P>(
    input: R,
    controller: &mut DecisionController,
    presenter: &mut P,
) -> io::Result<()>
where
    R: BufRead,
    P: DecisionPresenter,
{
    redraw(controller, presenter);

    for line in input.lines() {
        let line = line?;
        let command = match parse(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Blank) => continue,
            Ok(Input::Help) => {
                presenter.notify(&Notice::Hint(HELP.to_string()));
                continue;
            }
            Ok(Input::Show) => {
                redraw(controller, presenter);
                continue;
            }
            Ok(input) => match resolve(controller, input) {
                Ok(command) => command,
                Err(hint) => {
                    presenter.notify(&Notice::Hint(hint));
                    continue;
                }
            },
            Err(e) => {
                presenter.notify(&Notice::Hint(e.to_string()));
                continue;
            }
        };

        let outcome = controller.dispatch(command);
        present(controller, presenter, outcome);
    }
    Ok(())
}

/// Turns positional input into id-based commands.
fn resolve(controller: &DecisionController, input: Input) -> Result<DecisionCommand, String> {
    let entry_id = |side: Side, position: usize| {
        controller
            .decision()
            .entries(side)
            .get(position - 1)
            .map(|e| e.id().clone())
            .ok_or_else(|| format!("There is no {} #{}.", side.short_name(), position))
    };

    match input {
        Input::Command(command) => Ok(command),
        Input::Edit {
            side,
            position,
            text,
        } => Ok(DecisionCommand::UpdateText {
            side,
            id: entry_id(side, position)?,
            text,
        }),
        Input::Reweigh {
            side,
            position,
            weight,
        } => Ok(DecisionCommand::UpdateWeight {
            side,
            id: entry_id(side, position)?,
            weight,
        }),
        Input::Remove { side, position } => Ok(DecisionCommand::RemoveEntry {
            side,
            id: entry_id(side, position)?,
        }),
        Input::Show | Input::Help | Input::Quit | Input::Blank => {
            Err("Nothing to do.".to_string())
        }
    }
}

fn redraw<P: DecisionPresenter>(controller: &DecisionController, presenter: &mut P) {
    presenter.render(controller.decision(), &controller.score_board());
    presenter.show_recommendation(&RecommendationEngine::neutral());
}

fn present<P: DecisionPresenter>(
    controller: &DecisionController,
    presenter: &mut P,
    outcome: CommandOutcome,
) {
    match outcome {
        CommandOutcome::Unchanged => {}
        CommandOutcome::Updated => {
            presenter.render(controller.decision(), &controller.score_board())
        }
        CommandOutcome::Redrawn => redraw(controller, presenter),
        CommandOutcome::Recommended(rec) => presenter.show_recommendation(&rec),
        CommandOutcome::Shared(ShareOutcome::Copied { .. }) => {
            presenter.notify(&Notice::LinkCopied)
        }
        CommandOutcome::Shared(ShareOutcome::ManualCopy { link }) => {
            presenter.offer_manual_copy(&link)
        }
        CommandOutcome::ShareFailed => {
            presenter.notify(&Notice::Hint("Could not build a share link.".to_string()))
        }
        CommandOutcome::Cleared => {
            redraw(controller, presenter);
            presenter.notify(&Notice::Cleared);
        }
        CommandOutcome::LinkIgnored => presenter.notify(&Notice::LinkIgnored),
    }
}

//! Table rendering and change reporting for the prompt.

use shelfsync::prelude::*;

/// Print the mirrored list as a four-column table.
pub fn print_table(items: &[Item]) {
    println!("{:>5}  {:<28}  {:<20}  {:>9}", "id", "name", "owner", "price");
    for item in items {
        println!(
            "{:>5}  {:<28}  {:<20}  {:>9.2}",
            item.id, item.name, item.owner, item.price
        );
    }
    println!("({} records)", items.len());
}

/// Describe one applied change.
pub fn report(update: &SyncUpdate, items: &[Item]) {
    match &update.event {
        ListEvent::Snapshot(_) => eprintln!("<- snapshot: {} records", items.len()),
        ListEvent::Created(item) => eprintln!("<- created #{}: {}", item.id, item.name),
        ListEvent::Updated(item) => match update.outcome {
            ApplyOutcome::NoOp => eprintln!("<- updated #{}: not mirrored here", item.id),
            _ => eprintln!("<- updated #{}: {}", item.id, item.name),
        },
        ListEvent::Deleted(id) => match update.outcome {
            ApplyOutcome::NoOp => eprintln!("<- deleted #{id}: not mirrored here"),
            _ => eprintln!("<- deleted #{id}"),
        },
    }
}

/// Human label for a request outcome.
pub fn outcome_label(outcome: RequestOutcome) -> &'static str {
    match outcome {
        RequestOutcome::Delivered => "accepted; waiting for broadcast",
        RequestOutcome::Failed => "failed (see log); nothing applied locally",
        RequestOutcome::Suppressed => "suppressed by local guard",
    }
}

//! Card, hand, and shoe tests.

use std::collections::HashSet;

use bjtable::{Card, CardError, DECK_SIZE, DealerHand, Hand, Rank, Shoe, Suit};

fn hand(specs: &[&str]) -> Hand {
    specs.iter().map(|spec| spec.parse::<Card>().unwrap()).collect()
}

#[test]
fn card_point_values() {
    assert_eq!(Card::new(Suit::Hearts, Rank::Two).value(), 2);
    assert_eq!(Card::new(Suit::Clubs, Rank::Ten).value(), 10);
    assert_eq!(Card::new(Suit::Spades, Rank::Jack).value(), 10);
    assert_eq!(Card::new(Suit::Spades, Rank::Queen).value(), 10);
    assert_eq!(Card::new(Suit::Diamonds, Rank::King).value(), 10);
    assert_eq!(Card::new(Suit::Hearts, Rank::Ace).value(), 11);
}

#[test]
fn card_text_form() {
    let ten = Card::new(Suit::Spades, Rank::Ten);
    assert_eq!(ten.to_string(), "10♠");
    assert_eq!("10♠".parse::<Card>(), Ok(ten));
    assert_eq!("10s".parse::<Card>(), Ok(ten));
    assert_eq!(
        "qh".parse::<Card>(),
        Ok(Card::new(Suit::Hearts, Rank::Queen))
    );
    assert_eq!(" A♦ ".parse::<Card>(), Ok(Card::new(Suit::Diamonds, Rank::Ace)));

    for bad in ["", "♠", "11♠", "1S", "10X", "Z♥", "10"] {
        assert_eq!(bad.parse::<Card>(), Err(CardError::InvalidCardSpec), "{bad}");
    }
}

#[test]
fn rank_from_conventional_number() {
    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(2), Ok(Rank::Two));
    assert_eq!(Rank::try_from(10), Ok(Rank::Ten));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(CardError::InvalidCardSpec));
    assert_eq!(Rank::try_from(14), Err(CardError::InvalidCardSpec));
}

#[test]
fn soft_aces_resolve_one_at_a_time() {
    let two_aces_nine = hand(&["A♠", "A♥", "9♣"]);
    assert_eq!(two_aces_nine.value(), 21);
    assert!(two_aces_nine.is_soft());
    assert!(!two_aces_nine.is_blackjack());

    let three_aces = hand(&["A♠", "A♥", "A♣"]);
    assert_eq!(three_aces.value(), 13);
    assert!(three_aces.is_soft());

    let hard = hand(&["A♠", "6♥", "10♣"]);
    assert_eq!(hard.value(), 17);
    assert!(!hard.is_soft());

    let all_low = hand(&["A♠", "A♥", "A♣", "A♦", "10♠", "10♥"]);
    assert_eq!(all_low.value(), 24);
    assert!(all_low.is_bust());
    assert!(!all_low.is_soft());
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    let natural = hand(&["A♥", "K♠"]);
    assert_eq!(natural.value(), 21);
    assert!(natural.is_blackjack());

    let sevens = hand(&["7♠", "7♥", "7♦"]);
    assert_eq!(sevens.value(), 21);
    assert!(!sevens.is_blackjack());

    let twenty = hand(&["K♠", "Q♠"]);
    assert!(!twenty.is_blackjack());
}

#[test]
fn hand_add_and_clear() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);

    hand.add_card(Card::new(Suit::Hearts, Rank::Nine));
    hand.add_card(Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.value(), 20);

    hand.add_card(Card::new(Suit::Clubs, Rank::Five));
    assert_eq!(hand.value(), 15);

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Suit::Hearts, Rank::Ace));
    dealer.add_card(Card::new(Suit::Clubs, Rank::Six));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards().len(), 1);
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.up_card(), Some(&Card::new(Suit::Hearts, Rank::Ace)));

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn shoe_holds_every_card_of_every_deck() {
    let shoe = Shoe::new(6, 1);
    assert_eq!(shoe.len(), 6 * DECK_SIZE);
    assert_eq!(shoe.num_decks(), 6);

    let mut single = Shoe::with_threshold(1, 1, 5);
    let drawn: HashSet<Card> = (0..DECK_SIZE).map(|_| single.draw()).collect();
    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(single.is_empty());
    assert_eq!(single.reshuffles(), 0);
}

#[test]
fn zero_decks_still_builds_one() {
    let shoe = Shoe::new(0, 1);
    assert_eq!(shoe.num_decks(), 1);
    assert_eq!(shoe.len(), DECK_SIZE);
}

#[test]
fn draw_shrinks_shoe_by_one_after_any_reshuffle() {
    let mut shoe = Shoe::new(1, 3);

    for _ in 0..500 {
        let before = shoe.len();
        let reshuffles = shoe.reshuffles();
        shoe.draw();

        if before < 10 {
            assert_eq!(shoe.reshuffles(), reshuffles + 1);
            assert_eq!(shoe.len(), DECK_SIZE - 1);
        } else {
            assert_eq!(shoe.reshuffles(), reshuffles);
            assert_eq!(shoe.len(), before - 1);
        }
        assert!(shoe.len() >= 9);
    }
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(2, 99);
    let mut b = Shoe::new(2, 99);
    for _ in 0..150 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn stacked_cards_come_off_first() {
    let mut shoe = Shoe::new(1, 4);
    let draws = [
        Card::new(Suit::Spades, Rank::Ten),
        Card::new(Suit::Diamonds, Rank::Ten),
        Card::new(Suit::Hearts, Rank::Nine),
    ];
    shoe.stack(&draws);
    assert_eq!(shoe.len(), DECK_SIZE + 3);

    for expected in draws {
        assert_eq!(shoe.draw(), expected);
    }
    assert_eq!(shoe.len(), DECK_SIZE);
}
